//! Fade-in-on-scroll bookkeeping.
//!
//! A section animates in the first time enough of it enters the viewport.
//! The set of seen sections only ever grows, so the animation plays at most
//! once per section per page load, whichever way the reader scrolls.

use std::collections::BTreeSet;

use crate::section::SectionId;

/// One report from the viewport observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent {
    pub section: SectionId,
    /// Visible fraction of the target, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEvent {
    pub fn entering(section: SectionId, ratio: f64) -> Self {
        Self {
            section,
            ratio,
            is_intersecting: true,
        }
    }

    pub fn leaving(section: SectionId) -> Self {
        Self {
            section,
            ratio: 0.0,
            is_intersecting: false,
        }
    }
}

/// Capability to watch elements enter and leave the viewport.
///
/// Implementations deliver [`IntersectionEvent`]s to whatever handler they
/// were built with; on the web that is an `IntersectionObserver` callback.
pub trait ViewportObserver {
    /// Platform handle of an observable element.
    type Target: ?Sized;
    type Error;

    /// Start reporting intersections of `target` as `section`.
    fn observe(&mut self, section: SectionId, target: &Self::Target) -> Result<(), Self::Error>;

    /// Stop all observation. Called when the page unmounts.
    fn disconnect(&mut self);
}

/// Sections that have been scrolled into view at least once.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSections {
    threshold: f64,
    seen: BTreeSet<SectionId>,
}

impl VisibleSections {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            seen: BTreeSet::new(),
        }
    }

    /// Whether an event is strong enough to reveal its section.
    ///
    /// A ratio equal to the threshold counts, as with `IntersectionObserver`.
    pub fn qualifies(&self, event: &IntersectionEvent) -> bool {
        event.is_intersecting && event.ratio >= self.threshold
    }

    /// Apply an observer event. Returns `true` only for a first reveal;
    /// repeats and leave events are no-ops.
    pub fn record(&mut self, event: &IntersectionEvent) -> bool {
        if !self.qualifies(event) {
            return false;
        }
        self.mark(event.section)
    }

    /// Reveal a section directly. Idempotent.
    pub fn mark(&mut self, section: SectionId) -> bool {
        self.seen.insert(section)
    }

    /// Reveal every section that animates on scroll, for when no viewport
    /// observer could be installed. Returns `true` if anything changed.
    pub fn reveal_all(&mut self) -> bool {
        let before = self.seen.len();
        self.seen.extend(
            SectionId::ALL
                .into_iter()
                .filter(|section| section.reveals_on_scroll()),
        );
        self.seen.len() != before
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.seen.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.seen.iter().copied()
    }
}

impl Default for VisibleSections {
    fn default() -> Self {
        Self::new(crate::config::RevealConfig::default().threshold)
    }
}

/// Register every section that still has an animation pending.
///
/// Sections that never reveal on scroll, or were already revealed, are
/// skipped. Returns how many targets were handed to the observer.
pub fn observe_pending<'a, O, I>(
    observer: &mut O,
    visible: &VisibleSections,
    targets: I,
) -> Result<usize, O::Error>
where
    O: ViewportObserver,
    O::Target: 'a,
    I: IntoIterator<Item = (SectionId, &'a O::Target)>,
{
    let mut registered = 0;
    for (section, target) in targets {
        if !section.reveals_on_scroll() || visible.contains(section) {
            continue;
        }
        observer.observe(section, target)?;
        registered += 1;
    }
    Ok(registered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_reveals() {
        let mut visible = VisibleSections::new(0.1);
        assert!(visible.record(&IntersectionEvent::entering(SectionId::Services, 0.1)));
        assert!(visible.contains(SectionId::Services));
    }

    #[test]
    fn sliver_does_not_reveal() {
        let mut visible = VisibleSections::new(0.1);
        assert!(!visible.record(&IntersectionEvent::entering(SectionId::Services, 0.05)));
        assert!(visible.is_empty());
    }

    #[test]
    fn repeat_is_noop() {
        let mut visible = VisibleSections::new(0.1);
        assert!(visible.record(&IntersectionEvent::entering(SectionId::Packages, 0.4)));
        assert!(!visible.record(&IntersectionEvent::entering(SectionId::Packages, 0.9)));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn leaving_keeps_membership() {
        let mut visible = VisibleSections::default();
        visible.record(&IntersectionEvent::entering(SectionId::About, 0.5));
        visible.record(&IntersectionEvent::leaving(SectionId::About));
        assert!(visible.contains(SectionId::About));
    }

    #[test]
    fn reveal_all_shows_every_animated_section() {
        let mut visible = VisibleSections::default();
        visible.mark(SectionId::Services);
        assert!(visible.reveal_all());
        assert!(SectionId::ALL
            .into_iter()
            .filter(|s| s.reveals_on_scroll())
            .all(|s| visible.contains(s)));
        assert!(!visible.contains(SectionId::Hero));
        assert!(!visible.reveal_all());
    }

    #[test]
    fn ratio_at_threshold_qualifies() {
        let visible = VisibleSections::new(0.1);
        assert!(visible.qualifies(&IntersectionEvent::entering(SectionId::Safety, 0.1)));
    }

    #[test]
    fn iter_in_page_order() {
        let mut visible = VisibleSections::default();
        visible.mark(SectionId::Contact);
        visible.mark(SectionId::Services);
        visible.mark(SectionId::Gallery);
        let order: Vec<_> = visible.iter().collect();
        assert_eq!(
            order,
            vec![SectionId::Services, SectionId::Gallery, SectionId::Contact]
        );
    }
}
