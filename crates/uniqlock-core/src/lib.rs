//! Uniqlock Core Library
//!
//! This crate provides the diagnostic layer of the uniqlock job-locking library:
//! translation of embedded script failures into readable errors, and the closed
//! error taxonomy raised by the lock and worker-validation collaborators.
//!
//! # Modules
//!
//! - [`script`] - Interpreter error classification, source context windows,
//!   stack reconciliation and the translator that composes them
//! - [`error`] - `UniqlockError` taxonomy and `ErrorKind`
//! - [`config`] - Translator configuration loaded from defaults, files and environment

pub mod config;
pub mod error;
pub mod script;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, LoggingConfig, TranslatorConfig};
pub use error::{ErrorKind, UniqlockError, UniqlockResult};
pub use script::{
    ContextWindow, DEFAULT_CONTEXT_RADIUS, FrameMatcher, LibraryRoot, PassThrough, RawFailure,
    ScriptError, ScriptErrorTranslator, ScriptFailureMatch, ScriptLocation, ScriptPhase,
};
