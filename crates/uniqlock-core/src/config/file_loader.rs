//! File-based configuration loading

use super::ConfigError;
use super::model::{ConfigFile, TranslatorConfig};
use std::fs;
use std::path::Path;

/// Load configuration from a file on top of the defaults
///
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> Result<TranslatorConfig, ConfigError> {
    let mut config = TranslatorConfig::default();
    read_config_file(path)?.apply_to(&mut config);
    Ok(config)
}

/// Read the keys a config file sets
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// A missing file sets nothing.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |format: &'static str, message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    };

    let file: ConfigFile = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => {
            toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string()))?
        }
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))?
        }
        _ => serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))?,
    };

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("uniqlock.json");
        fs::write(
            &config_path,
            r#"{
                "library_root": "/gems/unique_jobs",
                "context_radius": 4,
                "logging": { "level": "debug", "format": "json" }
            }"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.library_root, "/gems/unique_jobs");
        assert_eq!(config.context_radius, 4);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("uniqlock.toml");
        fs::write(
            &config_path,
            r#"
library_root = "/srv/uniqlock"

[logging]
level = "warn"
"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.library_root, "/srv/uniqlock");
        assert_eq!(config.context_radius, 3);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("uniqlock.yml");
        fs::write(&config_path, "context_radius: 2\n").unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.context_radius, 2);
        assert_eq!(config.library_root, "uniqlock");
    }

    #[test]
    fn test_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TranslatorConfig::default());
    }

    #[test]
    fn test_read_config_file_keeps_absent_keys_unset() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("uniqlock.toml");
        fs::write(&config_path, "context_radius = 3\n").unwrap();

        let file = read_config_file(&config_path).unwrap();
        assert_eq!(file.context_radius, Some(3));
        assert_eq!(file.library_root, None);
        assert_eq!(file.logging, Default::default());
    }

    #[test]
    fn test_invalid_toml_reports_format_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "context_radius = [").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("TOML"));
        assert!(message.contains("broken.toml"));
    }
}
