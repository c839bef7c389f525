//! Interpreter error classification
//!
//! Decides whether a raw failure came out of the embedded script engine and,
//! if so, pulls out the phase, the failing line and the interpreter's reason.

use super::RawFailure;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Shape of a compile or runtime error raised by the store's script engine,
/// e.g. `ERR Error running script (call to f_1a2b): @user_script:12: attempt to call nil`
static SCRIPT_ERROR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"ERR Error (?P<phase>compiling|running) script \(.*?\): .*?:(?P<line>\d+): (?P<reason>.*)"#,
    )
    .unwrap()
});

/// Which stage of script execution failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPhase {
    /// The script did not compile (syntax error)
    Compiling,
    /// The script raised while running
    Running,
}

impl ScriptPhase {
    fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "compiling" => Some(Self::Compiling),
            "running" => Some(Self::Running),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compiling => "compiling",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for ScriptPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Captured parts of an interpreter error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFailureMatch {
    pub phase: ScriptPhase,
    /// 1-based line reported by the interpreter
    pub line: usize,
    /// Interpreter's own description, e.g. `attempt to call a nil value`
    pub reason: String,
}

/// Parse an interpreter error out of `message`.
///
/// The leftmost match wins. Returns `None` for anything that is not a script
/// failure, including line numbers too large to index with.
pub fn classify(message: &str) -> Option<ScriptFailureMatch> {
    let captures = SCRIPT_ERROR_PATTERN.captures(message)?;

    let phase = ScriptPhase::from_verb(captures.name("phase")?.as_str())?;
    let line = captures.name("line")?.as_str().parse::<usize>().ok()?;
    let reason = captures
        .name("reason")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Some(ScriptFailureMatch {
        phase,
        line,
        reason,
    })
}

/// Whether the translator should take over this failure
pub fn intercepts(raw: &RawFailure) -> bool {
    classify(&raw.message).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_running_error() {
        let found =
            classify("ERR Error running script (abc): sha1:12: attempt to call nil").unwrap();
        assert_eq!(found.phase, ScriptPhase::Running);
        assert_eq!(found.line, 12);
        assert_eq!(found.reason, "attempt to call nil");
    }

    #[test]
    fn test_classify_compiling_error() {
        let message = "ERR Error compiling script (new function): user_script:3: '=' expected near 'end'";
        let found = classify(message).unwrap();
        assert_eq!(found.phase, ScriptPhase::Compiling);
        assert_eq!(found.line, 3);
        assert_eq!(found.reason, "'=' expected near 'end'");
    }

    #[test]
    fn test_classify_store_prefixed_chunk_name() {
        let message = "ERR Error running script (call to f_8ea1): @user_script:27: user_script:27: Script attempted to access nonexistent global variable 'foo'";
        let found = classify(message).unwrap();
        assert_eq!(found.line, 27);
        assert_eq!(
            found.reason,
            "user_script:27: Script attempted to access nonexistent global variable 'foo'"
        );
    }

    #[test]
    fn test_classify_is_unanchored() {
        let message = "Redis::CommandError: ERR Error running script (x): f:4: boom";
        let found = classify(message).unwrap();
        assert_eq!(found.line, 4);
        assert_eq!(found.reason, "boom");
    }

    #[test]
    fn test_classify_leftmost_match_wins() {
        let message = "ERR Error running script (a): f:2: first ERR Error compiling script (b): g:9: second";
        let found = classify(message).unwrap();
        assert_eq!(found.phase, ScriptPhase::Running);
        assert_eq!(found.line, 2);
        assert!(found.reason.starts_with("first"));
    }

    #[test]
    fn test_classify_rejects_unrelated_messages() {
        assert!(classify("").is_none());
        assert!(classify("ERR wrong number of arguments for 'evalsha' command").is_none());
        assert!(classify("NOSCRIPT No matching script. Please use EVAL.").is_none());
        assert!(classify("ERR Error running script (abc): no line here").is_none());
        assert!(classify("ERR Error loading script (abc): f:1: nope").is_none());
    }

    #[test]
    fn test_classify_rejects_line_overflow() {
        let message = "ERR Error running script (abc): f:99999999999999999999999999: boom";
        assert!(classify(message).is_none());
    }

    #[test]
    fn test_intercepts() {
        assert!(intercepts(&RawFailure::from_message(
            "ERR Error running script (abc): sha1:12: attempt to call nil"
        )));
        assert!(!intercepts(&RawFailure::from_message("connection refused")));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(ScriptPhase::Compiling.to_string(), "compiling");
        assert_eq!(ScriptPhase::Running.to_string(), "running");
    }
}
