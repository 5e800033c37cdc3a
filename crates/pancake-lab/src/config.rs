//! Runtime configuration.
//!
//! Every setting has a default. Environment variables override them:
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `PANCAKE_LAB_JOURNAL_BUFFER` | [`LabConfig::journal_buffer`] | `256` |
//! | `PANCAKE_LAB_LOG` | [`LabConfig::log_filter`] | `info` |
//!
//! `RUST_LOG`, when set, still wins over `log_filter`.

use std::env;
use thiserror::Error;

pub const JOURNAL_BUFFER_VAR: &str = "PANCAKE_LAB_JOURNAL_BUFFER";
pub const LOG_FILTER_VAR: &str = "PANCAKE_LAB_LOG";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("journal_buffer must be greater than zero")]
    EmptyJournalBuffer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    /// Capacity of the order journal's mailbox. Events beyond it are dropped with a warning.
    pub journal_buffer: usize,
    /// Tracing directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            journal_buffer: 256,
            log_filter: "info".to_string(),
        }
    }
}

impl LabConfig {
    /// Defaults overridden by whatever is set in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(JOURNAL_BUFFER_VAR) {
            config.journal_buffer = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: JOURNAL_BUFFER_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(LOG_FILTER_VAR) {
            config.log_filter = value;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.journal_buffer == 0 {
            return Err(ConfigError::EmptyJournalBuffer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = LabConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LabConfig::default());
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = LabConfig::from_lookup(lookup(&[
            (JOURNAL_BUFFER_VAR, " 32 "),
            (LOG_FILTER_VAR, "pancake_lab=debug"),
        ]))
        .unwrap();

        assert_eq!(config.journal_buffer, 32);
        assert_eq!(config.log_filter, "pancake_lab=debug");
    }

    #[test]
    fn test_rejects_malformed_and_zero_buffer() {
        let malformed = LabConfig::from_lookup(lookup(&[(JOURNAL_BUFFER_VAR, "lots")]));
        assert!(matches!(malformed, Err(ConfigError::InvalidNumber { .. })));

        let zero = LabConfig::from_lookup(lookup(&[(JOURNAL_BUFFER_VAR, "0")]));
        assert_eq!(zero, Err(ConfigError::EmptyJournalBuffer));
    }
}
