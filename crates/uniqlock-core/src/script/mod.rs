//! Embedded script failure translation
//!
//! When an atomic script fails inside the key-value store, the raw failure only
//! says something like `ERR Error running script (...): @user_script:12: ...`
//! and carries a host stack that points into the transport. This module turns
//! such failures into a [`ScriptError`] whose message quotes the offending
//! source lines and whose stack starts at the script itself.
//!
//! - [`classifier`] - Recognises interpreter error messages
//! - [`context`] - Renders a numbered excerpt around the failing line
//! - [`stack`] - Splices the script frame into the host stack
//! - [`translator`] - Composes the three into a [`ScriptError`] or a [`PassThrough`]

pub mod classifier;
pub mod context;
pub mod stack;
pub mod translator;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use classifier::{ScriptFailureMatch, ScriptPhase, intercepts};
pub use context::{ContextWindow, DEFAULT_CONTEXT_RADIUS};
pub use stack::{FrameMatcher, LibraryRoot};
pub use translator::{PassThrough, ScriptError, ScriptErrorTranslator};

/// A failure reported by the script-execution collaborator, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFailure {
    /// Message as returned by the store
    pub message: String,
    /// Host frames, innermost first, typically `path:line[:extra]`
    #[serde(default)]
    pub raw_stack: Vec<String>,
}

impl RawFailure {
    pub fn new(message: impl Into<String>, raw_stack: Vec<String>) -> Self {
        Self {
            message: message.into(),
            raw_stack,
        }
    }

    /// Failure without any captured stack
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(message, Vec::new())
    }
}

impl fmt::Display for RawFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RawFailure {}

/// The script that was being executed when a failure surfaced.
///
/// Supplied by the caller; nothing in this crate reads script files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLocation {
    /// Path-like name used for the synthetic stack frame
    pub file: String,
    /// Full source text, if the caller still has it
    pub content: Option<String>,
}

impl ScriptLocation {
    pub fn new(file: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            content: Some(content.into()),
        }
    }

    /// Location whose source text is not available
    pub fn without_source(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            content: None,
        }
    }
}
