//! Logging setup for provider processes and tests
//!
//! Terraform controls provider verbosity through `TF_LOG` and the more specific
//! `TF_LOG_PROVIDER`. Output goes to stderr because stdout carries the plugin
//! handshake.

use std::str::FromStr;

pub const TF_LOG_ENV: &str = "TF_LOG";
pub const TF_LOG_PROVIDER_ENV: &str = "TF_LOG_PROVIDER";

/// Log level for the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            // TF_LOG=JSON means trace level in JSON format
            "TRACE" | "JSON" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl LogLevel {
    /// Resolve the level from the environment; unset or unknown values fall back to info
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(TF_LOG_PROVIDER_ENV).ok().as_deref(),
            std::env::var(TF_LOG_ENV).ok().as_deref(),
        )
    }

    fn resolve(provider: Option<&str>, global: Option<&str>) -> Self {
        provider
            .and_then(|v| v.parse().ok())
            .or_else(|| global.and_then(|v| v.parse().ok()))
            .unwrap_or_default()
    }
}

/// Install a stderr fmt subscriber. Returns false if one was already installed.
pub fn init(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

pub fn init_from_env() -> bool {
    init(LogLevel::from_env())
}
