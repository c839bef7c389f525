//! Translator configuration model

use super::ConfigError;
use super::logging_config::LoggingConfig;
use crate::script::DEFAULT_CONTEXT_RADIUS;
use serde::{Deserialize, Serialize};

/// Default installation root used to recognise library frames
pub const DEFAULT_LIBRARY_ROOT: &str = "uniqlock";

/// Settings for script failure translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Frames whose file path contains this string belong to the library
    pub library_root: String,
    /// Lines of source shown on each side of the failing line
    pub context_radius: usize,
    pub logging: LoggingConfig,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            library_root: DEFAULT_LIBRARY_ROOT.to_string(),
            context_radius: DEFAULT_CONTEXT_RADIUS,
            logging: LoggingConfig::default(),
        }
    }
}

/// A configuration file as written. Keys left out of the file are `None`
/// and keep whatever an earlier source set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub library_root: Option<String>,
    pub context_radius: Option<usize>,
    #[serde(default)]
    pub logging: LoggingFile,
}

/// The `[logging]` table of a [`ConfigFile`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingFile {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl ConfigFile {
    /// Overwrite every field of `config` that this file sets
    pub fn apply_to(self, config: &mut TranslatorConfig) {
        if let Some(root) = self.library_root {
            config.library_root = root;
        }
        if let Some(radius) = self.context_radius {
            config.context_radius = radius;
        }
        if let Some(level) = self.logging.level {
            config.logging.level = level;
        }
        if let Some(format) = self.logging.format {
            config.logging.format = format;
        }
    }
}

impl TranslatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.library_root.trim().is_empty() {
            return Err(ConfigError::invalid("library_root must not be empty"));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::invalid(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        if !self.logging.is_valid_format() {
            return Err(ConfigError::invalid(format!(
                "Unknown log format '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }
}
