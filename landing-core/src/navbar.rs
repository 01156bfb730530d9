//! Scroll flag behind the navbar style.

/// The two looks of the fixed navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// Over the hero image, white text.
    Transparent,
    /// After scrolling away from the top, white background with shadow.
    Solid,
}

impl NavbarStyle {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Transparent
        }
    }
}

/// Tracks whether the page has scrolled past the threshold.
///
/// Every scroll event goes through [`ScrollTracker::on_scroll`]; the
/// comparison is O(1) so there is no debouncing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Strictly greater than: an offset equal to the threshold is still "top".
    pub fn is_past(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// Record a scroll offset. Returns `true` when the flag flipped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = self.is_past(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn style(&self) -> NavbarStyle {
        NavbarStyle::from_scrolled(self.scrolled)
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(crate::config::NavbarConfig::default().scroll_threshold)
    }
}
