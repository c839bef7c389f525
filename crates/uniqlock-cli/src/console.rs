//! CLI console utilities

use colored::*;
use uniqlock_core::ContextWindow;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message to stderr, keeping stdout for command output
    pub fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print plain text as is
    pub fn print(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a context window with the failing row highlighted
    pub fn print_context(&self, window: &ContextWindow) {
        for row in window.render().lines() {
            if row.starts_with("=>") {
                println!("{}", row.red().bold());
            } else {
                println!("{}", row.dimmed());
            }
        }
    }

    /// Print stack frames, innermost first
    pub fn print_stack(&self, frames: &[String]) {
        for frame in frames {
            println!("  {} {}", "at".dimmed(), frame);
        }
    }
}
