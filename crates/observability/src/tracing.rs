//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops and return `false`).
pub fn init(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    // Timestamped logs; JSON unless pretty output was asked for.
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
    };

    if installed {
        ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_is_a_no_op() {
        let config = ObservabilityConfig::default();
        // Another test in this binary may already hold the global slot.
        init(&config);
        assert!(!init(&config));
    }

    #[test]
    fn malformed_filter_still_initializes_or_noops() {
        let config = ObservabilityConfig {
            filter: "[[[".to_string(),
            ..ObservabilityConfig::default()
        };
        // Must not panic.
        let _ = crate::init_with(&config);
    }
}
