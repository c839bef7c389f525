//! Uniqlock CLI application
//!
//! Offline companion to the uniqlock locking library: replays captured script
//! failures through the translator and shows script source around a line.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/uniqlock-cli
//! ```
//!
//! # Commands
//!
//! - `uniqlock explain --failure failure.json --script lock.lua [--json]`
//! - `uniqlock context lock.lua --line 12 [--radius 5]`
//! - `uniqlock config show|validate`
//!
//! Configuration comes from `uniqlock.toml` (or `--config-file`) and
//! `UNIQLOCK_*` environment variables. Set `RUST_LOG=debug` for verbose logging.

mod args;
mod commands;
mod console;
mod logging;
mod router;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use uniqlock_core::ConfigLoader;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new()
        .with_defaults()
        .with_file(&cli.config_file)
        .with_env()
        .load()
        .with_context(|| format!("Invalid configuration in '{}'", cli.config_file.display()))?;

    logging::init(&config.logging, cli.verbose);
    tracing::debug!("Running {:?}", cli.command);

    router::route(&cli, &config)
}
