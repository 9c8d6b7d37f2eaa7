//! Canvas configuration
//!
//! Defines the tunables of the snapshot history. Defaults match what the
//! console ships with; the retention bound can be raised for long editing
//! sessions on small graphs.

use thiserror::Error;

/// Default number of snapshots kept for undo
pub const DEFAULT_MAX_SNAPSHOTS: usize = 50;

/// Environment variable overriding the retention bound
pub const HISTORY_LIMIT_ENV: &str = "SLUICE_HISTORY_LIMIT";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting has a value outside its allowed range
    #[error("{name} must be greater than 0")]
    MustBePositive { name: &'static str },

    /// A setting could not be parsed
    #[error("Invalid value for {name}: `{value}`")]
    InvalidValue { name: &'static str, value: String },
}

/// Snapshot history configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of snapshots retained for undo; older ones are dropped
    pub max_snapshots: usize,
}

impl HistoryConfig {
    pub fn new(max_snapshots: usize) -> Self {
        Self { max_snapshots }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SLUICE_HISTORY_LIMIT (optional, default: 50)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_snapshots = match lookup(HISTORY_LIMIT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: HISTORY_LIMIT_ENV,
                    value: raw.clone(),
                })?,
            None => DEFAULT_MAX_SNAPSHOTS,
        };

        let config = Self { max_snapshots };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_snapshots == 0 {
            return Err(ConfigError::MustBePositive {
                name: "max_snapshots",
            });
        }

        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SNAPSHOTS)
    }
}
