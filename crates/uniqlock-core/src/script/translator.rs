//! Script failure translation
//!
//! [`ScriptErrorTranslator`] is the entry point used by the script-execution
//! collaborator: every failure it receives is either turned into a
//! [`ScriptError`] or handed back untouched as a [`PassThrough`].

use super::classifier::{ScriptPhase, classify};
use super::context::{ContextWindow, DEFAULT_CONTEXT_RADIUS};
use super::stack::{FrameMatcher, LibraryRoot, reconcile};
use super::{RawFailure, ScriptLocation};
use crate::config::TranslatorConfig;
use crate::error::UniqlockError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// A script failure with source context and a reconciled stack
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ScriptError {
    message: String,
    stack: Vec<String>,
    phase: ScriptPhase,
    file: String,
    line: usize,
    reason: String,
    context: ContextWindow,
    #[source]
    original: RawFailure,
}

impl ScriptError {
    /// Reason, a blank line, the context window and a trailing blank line
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Reconciled stack; the first frame is always `<file>:<line>`
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    pub fn phase(&self) -> ScriptPhase {
        self.phase
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line reported by the interpreter, before clamping
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn context(&self) -> &ContextWindow {
        &self.context
    }

    /// The failure this error was translated from
    pub fn original(&self) -> &RawFailure {
        &self.original
    }
}

/// A failure the translator declined to touch; re-raise it as is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct PassThrough(RawFailure);

impl PassThrough {
    pub fn raw(&self) -> &RawFailure {
        &self.0
    }

    pub fn into_inner(self) -> RawFailure {
        self.0
    }
}

/// Translates raw script failures into [`ScriptError`]s.
///
/// Holds no state beyond its configuration, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct ScriptErrorTranslator<M = LibraryRoot> {
    marker: M,
    context_radius: usize,
}

impl ScriptErrorTranslator<LibraryRoot> {
    /// Translator treating frames under `library_root` as library frames
    pub fn new(library_root: impl Into<String>) -> Self {
        Self::with_matcher(LibraryRoot::new(library_root))
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(config.library_root.clone()).with_context_radius(config.context_radius)
    }
}

impl<M: FrameMatcher> ScriptErrorTranslator<M> {
    pub fn with_matcher(marker: M) -> Self {
        Self {
            marker,
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }

    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    pub fn context_radius(&self) -> usize {
        self.context_radius
    }

    /// Translate `raw`, or give it back unchanged.
    ///
    /// Falls back to [`PassThrough`] when the message is not an interpreter
    /// error or when the script source is missing or empty.
    pub fn translate(
        &self,
        raw: RawFailure,
        location: &ScriptLocation,
    ) -> Result<ScriptError, PassThrough> {
        let Some(found) = classify(&raw.message) else {
            debug!("Passing through non-script failure: {}", raw.message);
            return Err(PassThrough(raw));
        };

        let content = location.content.as_deref().unwrap_or_default();
        let Some(context) = ContextWindow::extract(content, found.line, self.context_radius)
        else {
            warn!(
                "No source available for script '{}'; passing failure through",
                location.file
            );
            return Err(PassThrough(raw));
        };

        debug!(
            "Translating {} error in {}:{}",
            found.phase, location.file, found.line
        );

        let message = format!("{}\n\n{}\n\n", found.reason, context.render());
        let stack = reconcile(&raw.raw_stack, &self.marker, &location.file, found.line);

        Ok(ScriptError {
            message,
            stack,
            phase: found.phase,
            file: location.file.clone(),
            line: found.line,
            reason: found.reason,
            context,
            original: raw,
        })
    }

    /// Like [`translate`](Self::translate), folded into [`UniqlockError`]
    pub fn translate_error(&self, raw: RawFailure, location: &ScriptLocation) -> UniqlockError {
        match self.translate(raw, location) {
            Ok(script) => UniqlockError::Script(script),
            Err(pass) => UniqlockError::PassThrough(pass.into_inner()),
        }
    }
}
