//! Logging configuration

use serde::{Deserialize, Serialize};

/// Accepted values for [`LoggingConfig::format`]
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Accepted values for [`LoggingConfig::level`]
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn is_valid_level(&self) -> bool {
        LOG_LEVELS.contains(&self.level.to_lowercase().as_str())
    }

    pub fn is_valid_format(&self) -> bool {
        LOG_FORMATS.contains(&self.format.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
        assert!(config.is_valid_level());
        assert!(config.is_valid_format());
    }

    #[test]
    fn test_logging_config_validity() {
        let config = LoggingConfig {
            level: "WARN".to_string(),
            format: "xml".to_string(),
        };
        assert!(config.is_valid_level());
        assert!(!config.is_valid_format());
    }
}
