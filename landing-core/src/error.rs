//! Error types for configuration and carousel navigation.

use thiserror::Error;

/// Errors raised while loading or validating [`crate::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into a config.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scroll threshold must be a finite, non-negative offset.
    #[error("navbar.scroll_threshold must be finite and >= 0, got {0}")]
    ScrollThreshold(f64),

    /// Reveal threshold is an intersection ratio.
    #[error("reveal.threshold must be within [0, 1], got {0}")]
    RevealThreshold(f64),

    /// A zero interval would spin the carousel timer.
    #[error("carousel.interval_ms must be greater than zero")]
    ZeroInterval,

    /// A deep-link target was left empty.
    #[error("contact.{0} must not be empty")]
    EmptyContact(&'static str),

    /// A number field that deep links are built from contains no digits.
    #[error("contact.{0} must contain at least one digit")]
    NoDigits(&'static str),
}

/// Errors raised by [`crate::Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A carousel needs at least one slide to cycle through.
    #[error("carousel has no slides")]
    Empty,

    /// Dot selection outside `[0, len)`.
    #[error("slide {index} out of range (carousel has {len} slides)")]
    OutOfRange {
        /// Requested slide.
        index: usize,
        /// Number of slides.
        len: usize,
    },
}
