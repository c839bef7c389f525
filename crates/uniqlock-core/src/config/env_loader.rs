//! Environment variable-based configuration loading

use super::ConfigError;
use super::model::TranslatorConfig;
use std::env;

pub const ENV_LIBRARY_ROOT: &str = "UNIQLOCK_LIBRARY_ROOT";
pub const ENV_CONTEXT_RADIUS: &str = "UNIQLOCK_CONTEXT_RADIUS";
pub const ENV_LOG_LEVEL: &str = "UNIQLOCK_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "UNIQLOCK_LOG_FORMAT";

/// Apply `UNIQLOCK_*` environment variables on top of `config`
pub fn apply_env(config: &mut TranslatorConfig) -> Result<(), ConfigError> {
    apply_vars(config, |key| env::var(key).ok())
}

/// Apply overrides read through `lookup`.
///
/// Split out from [`apply_env`] so callers can feed variables from anywhere.
pub fn apply_vars<F>(config: &mut TranslatorConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup(ENV_LIBRARY_ROOT) {
        config.library_root = root;
    }

    if let Some(radius) = lookup(ENV_CONTEXT_RADIUS) {
        config.context_radius = radius.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            key: ENV_CONTEXT_RADIUS.to_string(),
            value: radius.clone(),
        })?;
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    if let Some(format) = lookup(ENV_LOG_FORMAT) {
        config.logging.format = format;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_apply_vars_overrides() {
        let mut config = TranslatorConfig::default();
        apply_vars(
            &mut config,
            lookup(&[
                (ENV_LIBRARY_ROOT, "/bundle/unique_jobs"),
                (ENV_CONTEXT_RADIUS, " 6 "),
                (ENV_LOG_LEVEL, "trace"),
                (ENV_LOG_FORMAT, "compact"),
            ]),
        )
        .unwrap();

        assert_eq!(config.library_root, "/bundle/unique_jobs");
        assert_eq!(config.context_radius, 6);
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_apply_vars_without_variables_is_noop() {
        let mut config = TranslatorConfig::default();
        apply_vars(&mut config, lookup(&[])).unwrap();
        assert_eq!(config, TranslatorConfig::default());
    }

    #[test]
    fn test_invalid_radius_is_rejected() {
        let mut config = TranslatorConfig::default();
        let err = apply_vars(&mut config, lookup(&[(ENV_CONTEXT_RADIUS, "wide")])).unwrap_err();
        assert!(err.to_string().contains(ENV_CONTEXT_RADIUS));
        assert!(err.to_string().contains("wide"));
    }
}
