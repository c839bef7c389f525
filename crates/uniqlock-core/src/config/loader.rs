//! Configuration loading from multiple sources

use super::ConfigError;
use super::env_loader::{apply_env, apply_vars};
use super::file_loader::read_config_file;
use super::model::TranslatorConfig;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a file
    File(PathBuf),
    /// Configuration from `UNIQLOCK_*` environment variables
    Environment,
    /// Explicit variable overrides, keyed like the environment variables
    Overrides(HashMap<String, String>),
    /// Default configuration; discards what earlier sources set
    Default,
}

/// Configuration loader with support for multiple sources.
///
/// Sources are applied in the order they were added.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    pub fn with_overrides(self, overrides: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::Overrides(overrides))
    }

    /// Add default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources and validate the result
    pub fn load(self) -> Result<TranslatorConfig, ConfigError> {
        let mut config = TranslatorConfig::default();

        for source in &self.sources {
            match source {
                ConfigSource::File(path) => {
                    tracing::debug!("Loading config from file: {}", path.display());
                    read_config_file(path)?.apply_to(&mut config);
                }
                ConfigSource::Environment => {
                    tracing::debug!("Loading config from environment");
                    apply_env(&mut config)?;
                }
                ConfigSource::Overrides(vars) => {
                    tracing::debug!("Applying {} config overrides", vars.len());
                    apply_vars(&mut config, |key| vars.get(key).cloned())?;
                }
                ConfigSource::Default => {
                    tracing::debug!("Resetting to default config");
                    config = TranslatorConfig::default();
                }
            }
        }

        tracing::debug!(
            "Loaded config: library_root={}, context_radius={}",
            config.library_root,
            config.context_radius
        );

        config.validate()?;
        Ok(config)
    }
}
