//! Simulated-network configuration.
//!
//! # Responsibility
//! - Hold latency and failure-rate knobs for the default network policy.
//! - Validate values before they reach the random draws.
//!
//! # Invariants
//! - Defaults reproduce the UI demo backend: 200ms base, 400ms jitter, 10%
//!   failures.
//! - A validated config never produces a failure rate outside `[0, 1]`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const DEFAULT_BASE_DELAY_MS: u64 = 200;
pub const DEFAULT_JITTER_MS: u64 = 400;
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Config error for simulated-network settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failure rate is NaN, infinite or outside `[0, 1]`.
    InvalidFailureRate(f64),
    /// `base_delay_ms + jitter_ms` does not fit in `u64`.
    DelayOverflow,
    /// Config text could not be parsed.
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFailureRate(rate) => {
                write!(f, "failure_rate must be within [0, 1], got {rate}")
            }
            Self::DelayOverflow => write!(f, "base_delay_ms + jitter_ms overflows"),
            Self::Parse(message) => write!(f, "invalid network config: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Latency and failure settings for the randomized network policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Minimum simulated delay.
    pub base_delay_ms: u64,
    /// Width of the uniform delay window above `base_delay_ms`.
    pub jitter_ms: u64,
    /// Probability that a write fails after its delay.
    pub failure_rate: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            jitter_ms: DEFAULT_JITTER_MS,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }
}

impl NetworkConfig {
    /// Config with no delay and no failures.
    pub fn instant() -> Self {
        Self {
            base_delay_ms: 0,
            jitter_ms: 0,
            failure_rate: 0.0,
        }
    }

    /// Parses a JSON object; missing keys keep their defaults.
    ///
    /// # Errors
    /// - Returns `ConfigError::Parse` for malformed JSON.
    /// - Returns validation errors from `validate()`.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.failure_rate.is_finite() || !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::InvalidFailureRate(self.failure_rate));
        }
        if self.base_delay_ms.checked_add(self.jitter_ms).is_none() {
            return Err(ConfigError::DelayOverflow);
        }
        Ok(())
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Exclusive upper bound of the simulated delay.
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms.saturating_add(self.jitter_ms))
    }
}
