//! Quote configuration
//!
//! Loaded from a JSON file such as:
//! ```json
//! { "annual_rate": 0.10, "terms": [3, 6, 12, 18, 24] }
//! ```
//! Missing fields take the showroom defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{QuoteError, Result};
use crate::offering::TermOffering;
use crate::quote::DEFAULT_ANNUAL_RATE;

/// Default path to the quote configuration file
pub const DEFAULT_CONFIG_PATH: &str = "installments.json";

/// Rate and offered terms used when quoting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Annual interest rate as a fraction (default: 10%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Offered term lengths in months (default: 3, 6, 12, 18, 24)
    #[serde(default)]
    pub terms: TermOffering,
}

fn default_annual_rate() -> f64 { DEFAULT_ANNUAL_RATE }

impl QuoteConfig {
    /// Showroom defaults: 10% annual, terms 3/6/12/18/24
    pub fn default_showroom() -> Self {
        Self {
            annual_rate: DEFAULT_ANNUAL_RATE,
            terms: TermOffering::default(),
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: QuoteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::debug!(
            "Loaded quote config from {}: rate={} terms={:?}",
            path.as_ref().display(),
            config.annual_rate,
            config.terms.terms()
        );
        Ok(config)
    }

    /// Load from [`DEFAULT_CONFIG_PATH`], falling back to defaults when the
    /// file does not exist
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(DEFAULT_CONFIG_PATH)
    }

    /// Load from `path`, using showroom defaults only when the file does not
    /// exist. Unreadable or invalid files are still errors.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::from_json_path(path.as_ref()) {
            Err(QuoteError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::warn!("{} not found, using showroom defaults", path.as_ref().display());
                Ok(Self::default_showroom())
            }
            other => other,
        }
    }

    /// Override the annual rate, keeping it non-negative
    pub fn with_annual_rate(mut self, annual_rate: f64) -> Result<Self> {
        self.annual_rate = annual_rate;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(QuoteError::InvalidRate { rate: self.annual_rate });
        }
        Ok(())
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self::default_showroom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_for_missing_fields() {
        let config = QuoteConfig::from_json_str("{}").unwrap();
        assert_eq!(config, QuoteConfig::default_showroom());

        let config = QuoteConfig::from_json_str(r#"{ "annual_rate": 0.05 }"#).unwrap();
        assert_eq!(config.annual_rate, 0.05);
        assert_eq!(config.terms, TermOffering::default());
    }

    #[test]
    fn test_custom_terms() {
        let config = QuoteConfig::from_json_str(r#"{ "terms": [12, 24, 36, 48] }"#).unwrap();
        assert_eq!(config.terms.terms(), &[12, 24, 36, 48]);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            QuoteConfig::from_json_str(r#"{ "annual_rate": -0.01 }"#),
            Err(QuoteError::InvalidRate { .. })
        ));
        assert!(matches!(
            QuoteConfig::from_json_str(r#"{ "terms": [24, 12] }"#),
            Err(QuoteError::Json(_))
        ));
        assert!(QuoteConfig::default_showroom().with_annual_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_from_json_path() {
        let path = std::env::temp_dir().join(format!("ev_installments_cfg_{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "annual_rate": 0.12, "terms": [6, 12] }}"#).unwrap();
        drop(file);

        let config = QuoteConfig::from_json_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.annual_rate, 0.12);
        assert_eq!(config.terms.len(), 2);
    }

    #[test]
    fn test_load_or_default() {
        let dir = std::env::temp_dir();
        let pid = std::process::id();

        // Missing file falls back to defaults
        let missing = dir.join(format!("ev_installments_missing_{}.json", pid));
        let config = QuoteConfig::load_or_default(&missing).unwrap();
        assert_eq!(config, QuoteConfig::default_showroom());

        // Existing file is parsed
        let valid = dir.join(format!("ev_installments_valid_{}.json", pid));
        fs::write(&valid, r#"{ "annual_rate": 0.08, "terms": [12, 24] }"#).unwrap();
        let config = QuoteConfig::load_or_default(&valid);
        fs::remove_file(&valid).unwrap();
        let config = config.unwrap();
        assert_eq!(config.annual_rate, 0.08);
        assert_eq!(config.terms.terms(), &[12, 24]);

        // Invalid file is an error, not a fallback
        let invalid = dir.join(format!("ev_installments_invalid_{}.json", pid));
        fs::write(&invalid, r#"{ "annual_rate": -1.0 }"#).unwrap();
        let result = QuoteConfig::load_or_default(&invalid);
        fs::remove_file(&invalid).unwrap();
        assert!(matches!(result, Err(QuoteError::InvalidRate { .. })));

        let garbled = dir.join(format!("ev_installments_garbled_{}.json", pid));
        fs::write(&garbled, "not json").unwrap();
        let result = QuoteConfig::load_or_default(&garbled);
        fs::remove_file(&garbled).unwrap();
        assert!(matches!(result, Err(QuoteError::Json(_))));
    }

    #[test]
    fn test_missing_path_is_io_error() {
        let result = QuoteConfig::from_json_path("/nonexistent/installments.json");
        assert!(matches!(result, Err(QuoteError::Io(_))));
    }
}
