//! Filler configuration.
//!
//! The serializable part of a filler: how deep to search and whether the result is
//! expanded to a uniform precision. The predicate pair is not configuration data and is
//! supplied through [`FillerBuilder`](crate::builder::FillerBuilder).

use crate::cell::MAX_GEOHASH_PRECISION;

/// Precision and output shape of a fill.
///
/// Values are not validated. A precision of 0 decides the fate of the root cell alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillerConfig {
    /// Deepest cell length the search subdivides to.
    #[serde(default = "FillerConfig::default_max_precision")]
    pub max_precision: usize,

    /// Expand every accepted cell to `max_precision`.
    #[serde(default)]
    pub fixed_precision: bool,
}

impl FillerConfig {
    const fn default_max_precision() -> usize {
        6
    }

    pub fn with_max_precision(mut self, precision: usize) -> Self {
        if precision > MAX_GEOHASH_PRECISION {
            log::warn!(
                "Max precision {} exceeds the deepest decodable geohash precision {}; \
                fills with the default predicates will fail once they reach that depth.",
                precision,
                MAX_GEOHASH_PRECISION
            );
        }
        self.max_precision = precision;
        self
    }

    pub fn with_fixed_precision(mut self, fixed: bool) -> Self {
        self.fixed_precision = fixed;
        self
    }

    /// Parse a configuration from TOML.
    ///
    /// ```
    /// use hashfill::FillerConfig;
    ///
    /// let config = FillerConfig::from_toml_str("max_precision = 4\nfixed_precision = true").unwrap();
    /// assert_eq!(config.max_precision, 4);
    /// assert!(config.fixed_precision);
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> crate::error::Result<Self> {
        let config: FillerConfig = toml::from_str(input)?;
        Ok(config.with_max_precision(config.max_precision))
    }
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            max_precision: Self::default_max_precision(),
            fixed_precision: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FillerConfig::default();
        assert_eq!(config.max_precision, 6);
        assert!(!config.fixed_precision);
    }

    #[test]
    fn test_chained_setters() {
        let config = FillerConfig::default()
            .with_max_precision(0)
            .with_fixed_precision(true);
        assert_eq!(config.max_precision, 0);
        assert!(config.fixed_precision);
    }

    #[test]
    fn test_precision_past_geohash_limit_is_accepted() {
        let config = FillerConfig::default().with_max_precision(20);
        assert_eq!(config.max_precision, 20);
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: FillerConfig = serde_json::from_str(r#"{"fixed_precision": true}"#).unwrap();
        assert_eq!(config.max_precision, 6);
        assert!(config.fixed_precision);
    }

    #[test]
    fn test_serde_rejects_unknown_fields() {
        let result: Result<FillerConfig, _> = serde_json::from_str(r#"{"precision": 3}"#);
        assert!(result.is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_str() {
        let config = FillerConfig::from_toml_str("max_precision = 3").unwrap();
        assert_eq!(config.max_precision, 3);
        assert!(!config.fixed_precision);

        let err = FillerConfig::from_toml_str("max_precision = \"deep\"").unwrap_err();
        assert!(matches!(err, crate::error::FillError::Config(_)));
    }
}
