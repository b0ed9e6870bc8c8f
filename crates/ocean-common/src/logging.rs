//! Tracing subscriber setup driven by the `logging` configuration section.

use crate::config::LoggingConfig;
use crate::error::{OceanError, OceanResult};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns an error if
/// a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> OceanResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt().with_env_filter(filter).with_target(true).with_level(true);

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| OceanError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        // The first call may lose to a subscriber installed by another test.
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(OceanError::Logging(_))));
    }
}
