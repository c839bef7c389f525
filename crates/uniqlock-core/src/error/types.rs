//! Core error types for uniqlock

use super::kind::ErrorKind;
use crate::script::{RawFailure, ScriptError};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type alias for uniqlock operations
pub type UniqlockResult<T> = Result<T, UniqlockError>;

/// Worker options as given to the lock, keyed by option name
pub type WorkerOptions = BTreeMap<String, Value>;

/// Every error the locking library hands to its callers.
///
/// The domain kinds are raised by the lock and worker-validation code; the
/// last two variants come out of script failure translation. Use [`kind`]
/// to branch on the variant without destructuring it.
///
/// [`kind`]: UniqlockError::kind
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UniqlockError {
    /// Another job with the same digest holds the lock
    #[error("Item with the key: {digest} is already scheduled or processing")]
    Conflict { digest: String },

    /// A lock type was registered twice
    #[error("{message}")]
    DuplicateLock { message: String },

    /// A conflict strategy was registered twice
    #[error("{message}")]
    DuplicateStrategy { message: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    /// Worker options failed validation
    #[error(
        "Expected {worker_name} to have valid sidekiq options but found the following problems:\n{}",
        .validation_errors.join("\n")
    )]
    InvalidWorker {
        worker_name: String,
        validation_errors: Vec<String>,
    },

    /// The worker's unique_args method rejected the job arguments
    #[error(
        "{worker_class}#unique_args takes {method_arity} arguments, received {}",
        render_json(.given_args)
    )]
    InvalidUniqueArguments {
        worker_class: String,
        /// Negative for methods taking a variable number of arguments
        method_arity: i32,
        given_args: Vec<Value>,
    },

    /// The worker has no `lock` option
    #[error(
        "{} is not configured for uniqueness. Missing the key `lock` in {}",
        worker_class_of(.options),
        render_json(.options)
    )]
    NotUniqueWorker { options: WorkerOptions },

    #[error("{message}")]
    UnknownLock { message: String },

    /// A script failure with source context and a reconciled stack
    #[error(transparent)]
    Script(ScriptError),

    /// A failure the translator could not interpret, unchanged
    #[error(transparent)]
    PassThrough(RawFailure),
}

impl UniqlockError {
    /// Which variant this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::DuplicateLock { .. } => ErrorKind::DuplicateLock,
            Self::DuplicateStrategy { .. } => ErrorKind::DuplicateStrategy,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::InvalidWorker { .. } => ErrorKind::InvalidWorker,
            Self::InvalidUniqueArguments { .. } => ErrorKind::InvalidUniqueArguments,
            Self::NotUniqueWorker { .. } => ErrorKind::NotUniqueWorker,
            Self::UnknownLock { .. } => ErrorKind::UnknownLock,
            Self::Script(_) => ErrorKind::Script,
            Self::PassThrough(_) => ErrorKind::PassThrough,
        }
    }

    /// Display message
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        self.kind().code()
    }

    /// Whether this came out of script translation with source context
    pub fn is_translated(&self) -> bool {
        matches!(self, Self::Script(_))
    }

    /// Reconciled stack, for translated script failures only
    pub fn script_stack(&self) -> Option<&[String]> {
        match self {
            Self::Script(script) => Some(script.stack()),
            _ => None,
        }
    }
}

impl From<ScriptError> for UniqlockError {
    fn from(error: ScriptError) -> Self {
        Self::Script(error)
    }
}

impl From<RawFailure> for UniqlockError {
    fn from(error: RawFailure) -> Self {
        Self::PassThrough(error)
    }
}

fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn worker_class_of(options: &WorkerOptions) -> String {
    match options.get("class") {
        Some(Value::String(class)) => class.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
