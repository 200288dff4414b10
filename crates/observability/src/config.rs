use core::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const LOG_FORMAT_VAR: &str = "POUCHSTORE_LOG_FORMAT";
pub const LOG_TARGET_VAR: &str = "POUCHSTORE_LOG_TARGET";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
    UnknownLogFormat(String),

    #[error("invalid boolean {0:?}")]
    InvalidBool(String),
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,pouchstore_products=debug`.
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Unset or invalid values fall back to
    /// defaults with a warning; loading never fails.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let filter = lookup(LOG_FILTER_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| {
                info!("{LOG_FILTER_VAR} not set, using default: {DEFAULT_FILTER}");
                defaults.filter.clone()
            });

        Self {
            filter,
            format: parse_or_default(&lookup, LOG_FORMAT_VAR, defaults.format),
            with_target: parse_or_default(&lookup, LOG_TARGET_VAR, defaults.with_target),
        }
    }
}

fn parse_or_default<T, E>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: ParseSetting<Err = E>,
    E: core::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => T::parse_setting(&raw).unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}");
            default
        }),
    }
}

trait ParseSetting: Sized {
    type Err;

    fn parse_setting(raw: &str) -> Result<Self, Self::Err>;
}

impl ParseSetting for LogFormat {
    type Err = ConfigError;

    fn parse_setting(raw: &str) -> Result<Self, Self::Err> {
        raw.parse()
    }
}

impl ParseSetting for bool {
    type Err = ConfigError;

    fn parse_setting(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool(raw.to_string())),
        }
    }
}
