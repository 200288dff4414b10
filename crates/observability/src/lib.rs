//! Tracing and logging setup shared by storefront processes.

/// Environment-driven settings.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> bool {
    init_with(&ObservabilityConfig::from_env())
}

/// Initialize process-wide observability with explicit settings.
///
/// Returns `true` when this call installed the global subscriber.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    tracing::init(config)
}
