//! # careathome-core
//!
//! Platform-independent core of the CareAtHome landing page.
//!
//! The page itself is static content plus three small pieces of cosmetic
//! client state. Everything here compiles and tests on the host; the
//! `careathome-landing` crate wires it to the browser.
//!
//! - [`content`] - the data tables that drive the single render path
//! - [`section`] - stable identifiers for page sections
//! - [`navbar`] - scroll flag for the navbar style
//! - [`reveal`] - visible-section set and the viewport observer capability
//! - [`carousel`] - the auto-advancing slide index
//! - [`booking`] - the (unwired) contact form model
//! - [`config`] - site configuration loaded from TOML
//!
//! ```rust
//! use careathome_core::{Carousel, content};
//!
//! let mut carousel = Carousel::new(content::SLIDES.len()).unwrap();
//! for _ in 0..12 {
//!     carousel.tick();
//! }
//! assert_eq!(carousel.index(), 2);
//! ```

pub mod booking;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod navbar;
pub mod reveal;
pub mod section;

pub use booking::{BookingDraft, BookingField, ServiceKind};
pub use carousel::Carousel;
pub use config::{CarouselConfig, ContactConfig, NavbarConfig, RevealConfig, SiteConfig};
pub use error::{CarouselError, ConfigError};
pub use navbar::{NavbarStyle, ScrollTracker};
pub use reveal::{IntersectionEvent, ViewportObserver, VisibleSections};
pub use section::SectionId;
