//! Configuration management commands

use crate::console::CliConsole;
use anyhow::{Context, Result, bail};
use std::path::Path;
use uniqlock_core::TranslatorConfig;
use uniqlock_core::config::file_loader::load_from_file;

/// Effective configuration rendered as TOML
pub fn render(config: &TranslatorConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Print the effective configuration
pub fn show(config: &TranslatorConfig, console: &CliConsole) -> Result<()> {
    console.print_header("Effective configuration");
    console.print(&render(config)?);
    Ok(())
}

/// Load `config_file` on its own over the defaults and validate it
pub fn validate(config_file: &Path, console: &CliConsole) -> Result<()> {
    if !config_file.exists() {
        bail!("Configuration file '{}' does not exist", config_file.display());
    }

    let config = load_from_file(config_file)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in '{}'", config_file.display()))?;

    console.print(&format!("✓ Configuration '{}' is valid", config_file.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_roundtrips_through_toml() {
        let config = TranslatorConfig {
            library_root: "/gems/unique_jobs".to_string(),
            context_radius: 2,
            ..TranslatorConfig::default()
        };
        let rendered = render(&config).unwrap();
        assert!(rendered.contains("library_root = \"/gems/unique_jobs\""));
        let parsed: TranslatorConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_accepts_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uniqlock.toml");
        fs::write(&path, "library_root = \"/gems/unique_jobs\"\n").unwrap();

        assert!(validate(&path, &CliConsole::new(false)).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        let err = validate(&path, &CliConsole::new(false)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_validate_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uniqlock.toml");
        fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

        let err = validate(&path, &CliConsole::new(false)).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(format!("{:#}", err).contains("xml"));
    }

    #[test]
    fn test_validate_rejects_unparsable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uniqlock.toml");
        fs::write(&path, "context_radius = [").unwrap();

        let err = validate(&path, &CliConsole::new(false)).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }
}
