//! Context command implementation

use crate::console::CliConsole;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use uniqlock_core::ContextWindow;

/// Build the context window for `line` of the script at `script`
pub fn window_for(script: &Path, line: usize, radius: usize) -> Result<ContextWindow> {
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script '{}'", script.display()))?;
    match ContextWindow::extract(&content, line, radius) {
        Some(window) => Ok(window),
        None => bail!("Script '{}' is empty", script.display()),
    }
}

/// Execute `uniqlock context`
pub fn execute(script: &Path, line: usize, radius: usize, console: &CliConsole) -> Result<()> {
    let window = window_for(script, line, radius)?;
    if window.indicator_line != line {
        console.warn(&format!(
            "Line {} is outside the script; showing line {}",
            line, window.indicator_line
        ));
    }
    console.print_header(&format!("{}:{}", script.display(), window.indicator_line));
    console.print_context(&window);
    Ok(())
}
