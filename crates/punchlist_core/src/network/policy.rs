//! Network policies: latency and failure decisions for simulated writes.

use crate::config::{ConfigError, NetworkConfig};
use rand::Rng;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Strategy supplying the simulated delay and failure decision for one write.
pub trait NetworkPolicy: Debug + Send + Sync {
    /// Delay to sleep before the write is evaluated.
    fn next_delay(&self) -> Duration;

    /// Whether the write should fail after its delay.
    fn should_fail(&self) -> bool;
}

/// Uniform random delay in `[base, base + jitter)` with a fixed failure rate.
#[derive(Debug, Clone)]
pub struct RandomNetworkPolicy {
    config: NetworkConfig,
}

impl RandomNetworkPolicy {
    /// # Errors
    /// - Returns the config validation error when `config` is invalid.
    pub fn new(config: NetworkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Default for RandomNetworkPolicy {
    fn default() -> Self {
        Self {
            config: NetworkConfig::default(),
        }
    }
}

impl NetworkPolicy for RandomNetworkPolicy {
    fn next_delay(&self) -> Duration {
        let jitter = if self.config.jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..self.config.jitter_ms)
        };
        Duration::from_millis(self.config.base_delay_ms + jitter)
    }

    fn should_fail(&self) -> bool {
        rand::thread_rng().gen::<f64>() < self.config.failure_rate
    }
}

/// Same delay and outcome on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNetworkPolicy {
    pub delay: Duration,
    pub fail: bool,
}

impl FixedNetworkPolicy {
    /// Always succeeds after `delay`.
    pub fn succeeding(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Always fails after `delay`.
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

impl NetworkPolicy for FixedNetworkPolicy {
    fn next_delay(&self) -> Duration {
        self.delay
    }

    fn should_fail(&self) -> bool {
        self.fail
    }
}

/// Fails the first `fail_count` writes, then succeeds.
#[derive(Debug)]
pub struct ScriptedNetworkPolicy {
    delay: Duration,
    fail_count: u32,
    calls: AtomicU32,
}

impl ScriptedNetworkPolicy {
    pub fn new(delay: Duration, fail_count: u32) -> Self {
        Self {
            delay,
            fail_count,
            calls: AtomicU32::new(0),
        }
    }

    /// Number of failure decisions made so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NetworkPolicy for ScriptedNetworkPolicy {
    fn next_delay(&self) -> Duration {
        self.delay
    }

    fn should_fail(&self) -> bool {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        attempt <= self.fail_count
    }
}

#[cfg(test)]
mod tests {
    use super::{NetworkPolicy, RandomNetworkPolicy, ScriptedNetworkPolicy};
    use crate::config::NetworkConfig;
    use std::time::Duration;

    #[test]
    fn random_delay_stays_within_window() {
        let policy = RandomNetworkPolicy::default();
        for _ in 0..200 {
            let delay = policy.next_delay();
            assert!(delay >= Duration::from_millis(200));
            assert!(delay < Duration::from_millis(600));
        }
    }

    #[test]
    fn zero_jitter_and_extreme_rates_are_deterministic() {
        let never = RandomNetworkPolicy::new(NetworkConfig::instant()).unwrap();
        assert_eq!(never.next_delay(), Duration::ZERO);
        assert!((0..100).all(|_| !never.should_fail()));

        let always = RandomNetworkPolicy::new(NetworkConfig {
            failure_rate: 1.0,
            ..NetworkConfig::instant()
        })
        .unwrap();
        assert!((0..100).all(|_| always.should_fail()));
    }

    #[test]
    fn random_policy_rejects_invalid_config() {
        let config = NetworkConfig {
            failure_rate: -0.1,
            ..NetworkConfig::default()
        };
        assert!(RandomNetworkPolicy::new(config).is_err());
    }

    #[test]
    fn scripted_policy_fails_then_recovers() {
        let policy = ScriptedNetworkPolicy::new(Duration::ZERO, 2);
        assert!(policy.should_fail());
        assert!(policy.should_fail());
        assert!(!policy.should_fail());
        assert_eq!(policy.calls(), 3);
    }
}
