//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use crate::console::CliConsole;
use anyhow::Result;
use uniqlock_core::TranslatorConfig;

/// Route CLI commands to their respective handlers
pub fn route(cli: &Cli, config: &TranslatorConfig) -> Result<()> {
    let console = CliConsole::new(cli.verbose);
    console.info(&format!(
        "Library root '{}', context radius {}",
        config.library_root, config.context_radius
    ));

    match &cli.command {
        Commands::Explain {
            failure,
            script,
            file,
            json,
        } => commands::explain::execute(failure, script, file.as_deref(), *json, config, &console),
        Commands::Context {
            script,
            line,
            radius,
        } => commands::context::execute(
            script,
            *line,
            radius.unwrap_or(config.context_radius),
            &console,
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(config, &console),
            ConfigAction::Validate => commands::config::validate(&cli.config_file, &console),
        },
    }
}
