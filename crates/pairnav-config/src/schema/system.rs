//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The `tracing_subscriber` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "pairnav=debug",
            LogLevel::Info => "pairnav=info",
            LogLevel::Warning => "pairnav=warn",
            LogLevel::Error => "pairnav=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
