//! Site configuration.
//!
//! Loaded from a TOML document (`landing/site.toml` is embedded into the
//! bundle). Every table is optional; missing keys fall back to the values
//! the page was designed with.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navbar: NavbarConfig,
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
}

/// Navbar style switch
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Scroll offset (CSS px) above which the navbar turns solid.
    pub scroll_threshold: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

/// Fade-in-on-scroll observer settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible ratio at which a section counts as seen.
    pub threshold: f64,
    /// Root margin handed to the observer. The negative bottom inset fires
    /// the trigger slightly before the section is fully in view.
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Gallery timer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 4000 }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Phone, chat and postal details shown in the contact block and footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub phone_display: String,
    /// Dialable number, `+` and digits.
    pub phone_dial: String,
    /// International number without `+`, as wa.me expects.
    pub whatsapp_number: String,
    pub whatsapp_display: String,
    pub email: String,
    pub address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone_display: "(555) 123-4567".to_string(),
            phone_dial: "+919876543210".to_string(),
            whatsapp_number: "919876543210".to_string(),
            whatsapp_display: "+91 98765 43210".to_string(),
            email: "info@careathome.com".to_string(),
            address: "123 Healthcare St, Medical District, City 12345".to_string(),
        }
    }
}

impl ContactConfig {
    /// `tel:` link for the phone dialer.
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }

    /// Deep link into WhatsApp chat.
    pub fn whatsapp_href(&self) -> String {
        let digits: String = self
            .whatsapp_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        format!("https://wa.me/{digits}")
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SiteConfig::from_toml_str`], but a broken document only costs a
    /// warning. The page always renders.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[careathome][config] {e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scroll = self.navbar.scroll_threshold;
        if !scroll.is_finite() || scroll < 0.0 {
            return Err(ConfigError::ScrollThreshold(scroll));
        }

        let ratio = self.reveal.threshold;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::RevealThreshold(ratio));
        }

        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if self.contact.phone_dial.trim().is_empty() {
            return Err(ConfigError::EmptyContact("phone_dial"));
        }
        if self.contact.whatsapp_number.trim().is_empty() {
            return Err(ConfigError::EmptyContact("whatsapp_number"));
        }
        // wa.me only keeps the digits.
        if !self.contact.whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::NoDigits("whatsapp_number"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.navbar.scroll_threshold, 50.0);
        assert_eq!(config.carousel.interval(), Duration::from_secs(4));
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [carousel]
            interval_ms = 2500

            [contact]
            email = "hello@example.org"
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.interval_ms, 2500);
        assert_eq!(config.contact.email, "hello@example.org");
        assert_eq!(config.contact.phone_dial, "+919876543210");
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn rejects_zero_interval() {
        let err = SiteConfig::from_toml_str("[carousel]\ninterval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval));
    }

    #[test]
    fn rejects_ratio_above_one() {
        let err = SiteConfig::from_toml_str("[reveal]\nthreshold = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::RevealThreshold(t) if t == 1.5));
    }

    #[test]
    fn rejects_negative_scroll_threshold() {
        let err = SiteConfig::from_toml_str("[navbar]\nscroll_threshold = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::ScrollThreshold(_)));
    }

    #[test]
    fn rejects_blank_dial_target() {
        let err = SiteConfig::from_toml_str("[contact]\nphone_dial = \"  \"").unwrap_err();
        assert_eq!(err.to_string(), "contact.phone_dial must not be empty");
    }

    #[test]
    fn rejects_whatsapp_number_without_digits() {
        let err = SiteConfig::from_toml_str("[contact]\nwhatsapp_number = \"+ -\"").unwrap_err();
        assert!(matches!(err, ConfigError::NoDigits("whatsapp_number")));
        assert_eq!(
            err.to_string(),
            "contact.whatsapp_number must contain at least one digit"
        );
    }

    #[test]
    fn parse_error_surfaces() {
        let err = SiteConfig::from_toml_str("[navbar\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn broken_document_falls_back() {
        let config = SiteConfig::load_or_default("[carousel]\ninterval_ms = \"fast\"");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn deep_links() {
        let contact = ContactConfig::default();
        assert_eq!(contact.tel_href(), "tel:+919876543210");
        assert_eq!(contact.whatsapp_href(), "https://wa.me/919876543210");
        assert_eq!(contact.mailto_href(), "mailto:info@careathome.com");
    }

    #[test]
    fn whatsapp_link_strips_formatting() {
        let contact = ContactConfig {
            whatsapp_number: "+91 98765-43210".into(),
            ..Default::default()
        };
        assert_eq!(contact.whatsapp_href(), "https://wa.me/919876543210");
    }
}
