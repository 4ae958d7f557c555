use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Short round used by the original game.
pub const SHORT_ROUND_MS: u64 = 10_000;
/// One-minute round variant.
pub const LONG_ROUND_MS: u64 = 60_000;
pub const ONE_SECOND_MS: u64 = 1_000;
pub const DEFAULT_WARNING_WINDOW_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub round_duration_ms: u64,
    pub tick_interval_ms: u64,
    // Ticks at or below this many seconds raise a countdown warning.
    pub warning_window_secs: u64,
    pub buzz_enabled: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_duration_ms: SHORT_ROUND_MS,
            tick_interval_ms: ONE_SECOND_MS,
            warning_window_secs: DEFAULT_WARNING_WINDOW_SECS,
            buzz_enabled: true,
        }
    }
}

impl RoundConfig {
    #[must_use]
    pub fn long() -> Self {
        Self {
            round_duration_ms: LONG_ROUND_MS,
            ..Self::default()
        }
    }

    /// Reads a config where every missing field takes its default.
    pub fn load_from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::load_from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    #[must_use]
    pub const fn round_duration_secs(&self) -> u64 {
        self.round_duration_ms / ONE_SECOND_MS
    }
}
