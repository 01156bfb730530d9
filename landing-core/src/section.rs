//! Page section identifiers.

use std::fmt;
use std::str::FromStr;

/// One visually distinct content block on the page.
///
/// The key doubles as the `data-section` attribute the viewport observer
/// reads back, and as the element id for the sections the navbar links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    Services,
    WhyChooseUs,
    Featured,
    Gallery,
    HowItWorks,
    Testimonials,
    Packages,
    About,
    Safety,
    Contact,
}

impl SectionId {
    /// Page order, top to bottom.
    pub const ALL: [SectionId; 11] = [
        SectionId::Hero,
        SectionId::Services,
        SectionId::WhyChooseUs,
        SectionId::Featured,
        SectionId::Gallery,
        SectionId::HowItWorks,
        SectionId::Testimonials,
        SectionId::Packages,
        SectionId::About,
        SectionId::Safety,
        SectionId::Contact,
    ];

    /// Stable kebab-case key.
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Services => "services",
            SectionId::WhyChooseUs => "why-choose-us",
            SectionId::Featured => "featured",
            SectionId::Gallery => "gallery",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Testimonials => "testimonials",
            SectionId::Packages => "packages",
            SectionId::About => "about",
            SectionId::Safety => "safety",
            SectionId::Contact => "contact",
        }
    }

    /// Same-document jump target (`#services`, ...).
    pub fn anchor(&self) -> String {
        format!("#{}", self.key())
    }

    /// Whether the section plays the fade-in animation.
    ///
    /// The hero is on screen at first paint, so it never waits for the observer.
    pub fn reveals_on_scroll(&self) -> bool {
        !matches!(self, SectionId::Hero)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a `data-section` attribute names no known section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for id in SectionId::ALL {
            assert_eq!(id.key().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn anchors_accepted() {
        assert_eq!("#packages".parse::<SectionId>(), Ok(SectionId::Packages));
        assert_eq!(SectionId::Testimonials.anchor(), "#testimonials");
    }

    #[test]
    fn unknown_key_rejected() {
        let err = "pricing".parse::<SectionId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section 'pricing'");
    }

    #[test]
    fn only_hero_skips_reveal() {
        let skipped: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|id| !id.reveals_on_scroll())
            .collect();
        assert_eq!(skipped, vec![SectionId::Hero]);
    }
}
