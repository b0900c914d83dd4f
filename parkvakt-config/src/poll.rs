//! Polling cadence configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Monitoring loop parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct PollConfig {
    /// Seconds between monitoring passes. One pass evaluates every park
    /// sequentially, so the effective per-park cadence is this interval
    /// plus whatever the fetches took.
    #[validate(range(min = 60, max = 21600))]
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    900
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fifteen_minutes() {
        let config = PollConfig::default();
        config.validate().expect("default poll config should be valid");
        assert_eq!(config.interval_secs, 900);
    }

    #[test]
    fn test_sub_minute_interval_rejected() {
        let config = PollConfig { interval_secs: 5 };
        assert!(config.validate().is_err());
    }
}
