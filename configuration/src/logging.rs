use tracing_subscriber::EnvFilter;

use crate::LoggingConfig;

/// Installs the global fmt subscriber on stderr, leaving stdout to command
/// output. `RUST_LOG` wins over the configured level. Calling it again once
/// a subscriber is set is a no-op.
pub fn setup_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.level, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_logging_is_idempotent() {
        let config = LoggingConfig::default();
        setup_logging(&config);
        setup_logging(&config);
    }

    #[test]
    fn bad_level_falls_back() {
        setup_logging(&LoggingConfig {
            level: "not a level ===".to_string(),
        });
    }
}
