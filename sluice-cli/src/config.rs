//! Configuration module
//!
//! Handles CLI configuration: the history settings used when replaying edits.

use anyhow::{Context, Result};
use sluice_canvas::HistoryConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// History settings for replayed editor sessions
    pub history: HistoryConfig,
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `--history-limit` given on the command line takes precedence over
    /// `SLUICE_HISTORY_LIMIT`.
    pub fn load(history_limit: Option<usize>) -> Result<Self> {
        let history = match history_limit {
            Some(limit) => HistoryConfig::new(limit),
            None => HistoryConfig::from_env().context("Invalid history configuration")?,
        };

        let config = Self { history };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        self.history.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_environment() {
        let config = Config::load(Some(5)).unwrap();
        assert_eq!(config.history.max_snapshots, 5);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Config::load(Some(0)).unwrap_err();
        assert!(err.to_string().contains("max_snapshots"));
    }
}
