//! Runtime configuration loaded from the process environment.
use std::env;
use std::time::Duration;

use battle_core::BattleConfig;

/// Tunables shared by every battle a registry creates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Capacity of each battle's action queue. A full queue blocks submitters.
    pub queue_capacity: usize,
    /// Idle wake-up period of a battle worker.
    pub poll_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            queue_capacity: BattleConfig::DEFAULT_QUEUE_CAPACITY,
            poll_interval: Duration::from_millis(BattleConfig::DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `BATTLE_QUEUE_CAPACITY`
    /// - `BATTLE_POLL_INTERVAL_MS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("BATTLE_QUEUE_CAPACITY") {
            config.queue_capacity = capacity.max(1);
        }

        if let Some(millis) = read_env::<u64>("BATTLE_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(millis.max(1));
        }

        config
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_battle_constants() {
        let config = RuntimeConfig::default();
        assert_eq!(config.queue_capacity, 100);
        assert_eq!(config.poll_interval, Duration::from_millis(100));
    }

    #[test]
    fn builders_clamp_to_minimum() {
        let config = RuntimeConfig::default()
            .with_queue_capacity(0)
            .with_poll_interval(Duration::ZERO);
        assert_eq!(config.queue_capacity, 1);
        assert_eq!(config.poll_interval, Duration::from_millis(1));
    }
}
