//! Configuration for script failure translation
//!
//! [`TranslatorConfig`] names the library's installation root (used to tell
//! library frames from application frames), the context radius and logging
//! settings. [`ConfigLoader`] layers defaults, a config file and `UNIQLOCK_*`
//! environment variables.

pub mod env_loader;
pub mod file_loader;
pub mod loader;
pub mod logging_config;
pub mod model;

use std::path::PathBuf;
use thiserror::Error;

pub use loader::{ConfigLoader, ConfigSource};
pub use logging_config::LoggingConfig;
pub use model::{ConfigFile, DEFAULT_LIBRARY_ROOT, LoggingFile, TranslatorConfig};

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config '{}': {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Invalid value '{value}' for {key}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
