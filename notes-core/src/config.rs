//! Service configuration.

use std::{env, time::Duration};
use thiserror::Error;

/// Table name used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "notes";
/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "ap-southeast-2";
/// Write timeout used when none is configured.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_millis(3000);

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but its value is unusable.
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Settings for the ingestion service and its DynamoDB backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesConfig {
    /// Table receiving note records.
    pub table_name: String,

    /// AWS region of the table.
    pub region: String,

    /// Optional endpoint override, e.g. DynamoDB Local.
    pub endpoint_url: Option<String>,

    /// Upper bound on a single storage write.
    pub write_timeout: Duration,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }
}

impl NotesConfig {
    /// Load from `NOTES_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(table_name) = lookup("NOTES_TABLE_NAME") {
            if table_name.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    name: "NOTES_TABLE_NAME",
                    value: table_name,
                    reason: "table name must not be empty".to_string(),
                });
            }
            config.table_name = table_name;
        }
        if let Some(region) = lookup("NOTES_REGION").filter(|r| !r.trim().is_empty()) {
            config.region = region;
        }
        config.endpoint_url = lookup("NOTES_ENDPOINT_URL").filter(|e| !e.trim().is_empty());
        if let Some(raw) = lookup("NOTES_WRITE_TIMEOUT_MS") {
            config.write_timeout = parse_timeout(raw)?;
        }

        Ok(config)
    }
}

fn parse_timeout(raw: String) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            name: "NOTES_WRITE_TIMEOUT_MS",
            value: raw,
            reason: "timeout must be positive".to_string(),
        }),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(e) => Err(ConfigError::Invalid {
            name: "NOTES_WRITE_TIMEOUT_MS",
            value: raw,
            reason: e.to_string(),
        }),
    }
}
