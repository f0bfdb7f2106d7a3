//! Interval configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Length of each walking phase in seconds.
pub const INTERVAL_SECONDS: u64 = 180;

/// Length of the pause between phases in seconds.
pub const TRANSITION_SECONDS: u64 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntervalConfig {
    pub interval_seconds: u64,
    pub transition_seconds: u64,
}

impl IntervalConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.interval_seconds == 0 {
            return Err(Error::Validation(
                "Interval duration must be greater than 0".to_string(),
            ));
        }

        if self.transition_seconds == 0 {
            return Err(Error::Validation(
                "Transition duration must be greater than 0".to_string(),
            ));
        }

        // Reasonable upper limit
        const MAX_DURATION: u64 = 3600; // 1 hour
        if self.interval_seconds > MAX_DURATION {
            return Err(Error::Validation(format!(
                "Interval duration too long (max {} seconds)",
                MAX_DURATION
            )));
        }

        if self.transition_seconds >= self.interval_seconds {
            return Err(Error::Validation(
                "Transition must be shorter than the interval".to_string(),
            ));
        }

        Ok(())
    }

    /// Get interval duration in minutes
    pub fn interval_minutes(&self) -> u64 {
        self.interval_seconds / 60
    }
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            interval_seconds: INTERVAL_SECONDS,
            transition_seconds: TRANSITION_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IntervalConfig::default();
        assert_eq!(config.interval_seconds, 180);
        assert_eq!(config.transition_seconds, 5);
        assert_eq!(config.interval_minutes(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = IntervalConfig {
            interval_seconds: 0,
            ..IntervalConfig::default()
        };
        assert!(config.validate().is_err());

        config.interval_seconds = 180;
        config.transition_seconds = 0;
        assert!(config.validate().is_err());

        config.transition_seconds = 200;
        assert!(config.validate().is_err());

        config.interval_seconds = 7200; // Too long
        config.transition_seconds = 5;
        assert!(config.validate().is_err());
    }
}
