//! System configuration types: performance and logging.

use serde::{Deserialize, Serialize};

/// Frame pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Target frames per second (valid range: 30-360).
    pub frame_rate: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { frame_rate: 144 }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for this level scoped to the starfield crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "starfield=trace",
            LogLevel::Debug => "starfield=debug",
            LogLevel::Info => "starfield=info",
            LogLevel::Warn => "starfield=warn",
            LogLevel::Error => "starfield=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
