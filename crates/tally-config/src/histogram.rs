//! Histogram paging limits.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_limit() -> u64 {
    50
}

const fn default_max_limit() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistogramConfig {
    /// Page size when the caller gives none.
    #[serde(default = "default_limit")]
    pub default_limit: u64,

    /// Largest page size a caller may request.
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl HistogramConfig {
    /// Check that both limits are positive and `default_limit <= max_limit`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "histogram.max_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(ConfigError::InvalidValue {
                field: "histogram.default_limit".into(),
                reason: format!("must be between 1 and max_limit ({})", self.max_limit),
            });
        }
        Ok(())
    }

    /// Resolve the page size for a request, clamped to `max_limit`.
    pub fn effective_limit(&self, requested: Option<u64>) -> u64 {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = HistogramConfig::default();
        assert_eq!(config.default_limit, 50);
        assert_eq!(config.max_limit, 1000);
        config.validate().unwrap();
    }

    #[test]
    fn rejects_default_above_max() {
        let config = HistogramConfig {
            default_limit: 200,
            max_limit: 100,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("histogram.default_limit"));
    }

    #[test]
    fn rejects_zero_max() {
        let config = HistogramConfig {
            default_limit: 0,
            max_limit: 0,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("histogram.max_limit"));
    }

    #[test]
    fn effective_limit_clamps() {
        let config = HistogramConfig::default();
        assert_eq!(config.effective_limit(None), 50);
        assert_eq!(config.effective_limit(Some(10)), 10);
        assert_eq!(config.effective_limit(Some(5000)), 1000);
        assert_eq!(config.effective_limit(Some(0)), 0);
    }
}
