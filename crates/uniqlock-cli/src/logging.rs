//! Logging setup for the CLI

use tracing_subscriber::EnvFilter;
use uniqlock_core::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level; `--verbose` forces debug.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // Already initialised in tests
    let _ = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };
}
