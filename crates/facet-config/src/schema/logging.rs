//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the facet crates.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "facet=trace",
            LogLevel::Debug => "facet=debug",
            LogLevel::Info => "facet=info",
            LogLevel::Warn => "facet=warn",
            LogLevel::Error => "facet=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log frames-per-second once a second.
    pub show_fps: bool,
}
