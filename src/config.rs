//! Session configuration, loadable from TOML.

use crate::error::ConfigError;
use crate::random::CustomNumberGenerator;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Upper bound accepted for [`SessionConfig::min_think_time_ms`].
pub const MAX_THINK_TIME_MS: u64 = 10_000;

/// Settings for a [`GameSession`](crate::session::GameSession).
///
/// ```toml
/// computer_seat = 1
/// min_think_time_ms = 1000
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Index into `GameModel::players()` of the computer-controlled player, if any.
    pub computer_seat: Option<usize>,
    /// Minimum wall-clock time a computer move takes, so replies do not appear instantly.
    pub min_think_time_ms: u64,
    /// Seed for reproducible random strategists.
    pub seed: Option<i64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            computer_seat: Some(1),
            min_think_time_ms: 0,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    #[instrument(level = "debug", skip(s))]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(seat) = self.computer_seat {
            if seat > 1 {
                return Err(ConfigError::Validation(format!(
                    "computer_seat must be 0 or 1, got {seat}"
                )));
            }
        }
        if self.min_think_time_ms > MAX_THINK_TIME_MS {
            return Err(ConfigError::Validation(format!(
                "min_think_time_ms must be <= {MAX_THINK_TIME_MS}, got {}",
                self.min_think_time_ms
            )));
        }
        Ok(())
    }

    pub fn min_think_time(&self) -> Duration {
        Duration::from_millis(self.min_think_time_ms)
    }

    /// Returns a generator seeded from [`SessionConfig::seed`], if one is set.
    pub fn seeded_generator(&self) -> Option<CustomNumberGenerator> {
        self.seed.map(CustomNumberGenerator::new)
    }
}
