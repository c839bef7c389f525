//! Explain command implementation
//!
//! Replays a captured raw failure through the translator so a failing lock
//! script can be debugged offline.

use crate::console::CliConsole;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use uniqlock_core::{
    ErrorKind, RawFailure, ScriptError, ScriptErrorTranslator, ScriptLocation, TranslatorConfig,
    UniqlockError,
};

/// JSON shape printed by `uniqlock explain --json`
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum ExplainOutput<'a> {
    Translated {
        #[serde(flatten)]
        error: &'a ScriptError,
    },
    PassThrough {
        message: &'a str,
        raw_stack: &'a [String],
    },
    Other {
        kind: ErrorKind,
        message: String,
    },
}

impl<'a> From<&'a UniqlockError> for ExplainOutput<'a> {
    fn from(error: &'a UniqlockError) -> Self {
        match error {
            UniqlockError::Script(script) => Self::Translated { error: script },
            UniqlockError::PassThrough(raw) => Self::PassThrough {
                message: &raw.message,
                raw_stack: &raw.raw_stack,
            },
            other => Self::Other {
                kind: other.kind(),
                message: other.render(),
            },
        }
    }
}

/// Read a serialized [`RawFailure`]
pub fn load_failure(path: &Path) -> Result<RawFailure> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read failure file '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse failure file '{}'", path.display()))
}

/// Translate the failure stored at `failure` against the script at `script`
pub fn translate_files(
    failure: &Path,
    script: &Path,
    file: Option<&str>,
    config: &TranslatorConfig,
) -> Result<UniqlockError> {
    let raw = load_failure(failure)?;
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script '{}'", script.display()))?;
    let file = file
        .map(str::to_string)
        .unwrap_or_else(|| script.display().to_string());

    let translator = ScriptErrorTranslator::from_config(config);
    Ok(translator.translate_error(raw, &ScriptLocation::new(file, content)))
}

/// Render the outcome as pretty JSON
pub fn json_report(error: &UniqlockError) -> Result<String> {
    serde_json::to_string_pretty(&ExplainOutput::from(error))
        .context("Failed to serialize explain output")
}

/// Execute `uniqlock explain`
pub fn execute(
    failure: &Path,
    script: &Path,
    file: Option<&str>,
    json: bool,
    config: &TranslatorConfig,
    console: &CliConsole,
) -> Result<()> {
    let outcome = translate_files(failure, script, file, config)?;

    if json {
        console.print(&json_report(&outcome)?);
        return Ok(());
    }

    match &outcome {
        UniqlockError::Script(error) => {
            console.print_header(&format!(
                "Script error ({}) at {}:{}",
                error.phase(),
                error.file(),
                error.line()
            ));
            console.print(error.reason());
            console.print("");
            console.print_context(error.context());
            console.print("");
            console.print("Stack:");
            console.print_stack(error.stack());
        }
        UniqlockError::PassThrough(raw) => {
            console.warn("Not a script failure; the original error is unchanged:");
            console.print(&raw.message);
            console.print_stack(&raw.raw_stack);
        }
        other => {
            console.warn(&format!("Unexpected {} error:", other.kind()));
            console.print(&other.render());
        }
    }

    Ok(())
}
