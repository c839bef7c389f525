//! Source context windows
//!
//! Renders a few numbered lines of script source around the line an
//! interpreter error points at:
//!
//! ```text
//!    9: local key = KEYS[1]
//!   10: local ttl = ARGV[1]
//!   11:
//! =>12: redis.call("EXPIRE", key, tl)
//!   13: return 1
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lines shown on each side of the failing line
pub const DEFAULT_CONTEXT_RADIUS: usize = 3;

const INDICATOR: &str = "=>";
const NO_INDICATOR: &str = "  ";

/// A bounded, numbered excerpt of script source.
///
/// Invariant: `1 <= start_line <= indicator_line <= end_line <= total lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    pub start_line: usize,
    pub end_line: usize,
    /// The failing line, marked with `=>`
    pub indicator_line: usize,
    /// One row per line in `start_line..=end_line`, each keeping the source
    /// line's original terminator
    pub rendered_lines: Vec<String>,
}

impl ContextWindow {
    /// Build the window around `line` in `content`.
    ///
    /// `line` is clamped into the script, so an interpreter reporting a line
    /// past the end still yields the closest lines. Returns `None` only when
    /// `content` has no lines at all.
    pub fn extract(content: &str, line: usize, radius: usize) -> Option<Self> {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let total_lines = lines.len();
        if total_lines == 0 {
            return None;
        }

        let indicator_line = line.clamp(1, total_lines);
        let start_line = indicator_line.saturating_sub(radius).max(1);
        let end_line = indicator_line.saturating_add(radius).min(total_lines);
        let width = end_line.to_string().len();

        let rendered_lines = (start_line..=end_line)
            .map(|number| {
                let indicator = if number == indicator_line {
                    INDICATOR
                } else {
                    NO_INDICATOR
                };
                format!(
                    "{}{:>width$}: {}",
                    indicator,
                    number,
                    lines[number - 1],
                    width = width
                )
            })
            .collect();

        Some(Self {
            start_line,
            end_line,
            indicator_line,
            rendered_lines,
        })
    }

    /// Rows joined back together, without the final line terminator
    pub fn render(&self) -> String {
        let joined = self.rendered_lines.concat();
        chomp(&joined).to_string()
    }

    /// Number of rows in the window
    pub fn len(&self) -> usize {
        self.rendered_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered_lines.is_empty()
    }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Drop one trailing `\n`, `\r\n` or `\r`
fn chomp(text: &str) -> &str {
    if let Some(stripped) = text.strip_suffix("\r\n") {
        stripped
    } else if let Some(stripped) = text.strip_suffix('\n') {
        stripped
    } else {
        text.strip_suffix('\r').unwrap_or(text)
    }
}
