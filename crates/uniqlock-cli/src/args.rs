//! CLI argument definitions using clap
//!
//! - uniqlock explain --failure f.json --script lock.lua   # Translate a captured failure
//! - uniqlock context lock.lua --line 12                  # Show source around a line
//! - uniqlock config show                                 # Print the effective config

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "uniqlock.toml";

#[derive(Parser, Debug)]
#[command(name = "uniqlock")]
#[command(about = "Explain script failures raised by uniqlock job locks")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Translate a captured raw failure against the script that produced it
    Explain {
        /// JSON file with `message` and `raw_stack`
        #[arg(long)]
        failure: PathBuf,

        /// Script source that was executing
        #[arg(long)]
        script: PathBuf,

        /// Name used for the script frame (defaults to the script path)
        #[arg(long)]
        file: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the numbered source lines around a script line
    Context {
        /// Script file
        script: PathBuf,

        /// 1-based line to mark
        #[arg(long, short)]
        line: usize,

        /// Lines on each side (defaults to the configured radius)
        #[arg(long, short)]
        radius: Option<usize>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}
