//! Configuration loading and management

use crate::core::FailurePolicy;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable naming an optional YAML override file
pub const CONFIG_ENV_VAR: &str = "ORDER_STREAM_CONFIG";

pub const DEFAULT_TABLE_NAME: &str = "GadgetOrders_Ritayan";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_INTERVAL_MS: u64 = 2_000;

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

/// Settings for one run of the order stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Destination table
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// AWS region hosting the table
    #[serde(default = "default_region")]
    pub region: String,

    /// Named credential profile resolved by the SDK
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Pause between two writes, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Stop as unhealthy after this many failed records in a row
    #[serde(default)]
    pub max_consecutive_failures: Option<u32>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
            region: default_region(),
            profile: default_profile(),
            interval_ms: default_interval_ms(),
            failure_policy: FailurePolicy::default(),
            max_consecutive_failures: None,
        }
    }
}

impl StreamConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Built-in defaults, or the file named by `ORDER_STREAM_CONFIG`
    pub fn load() -> Result<Self> {
        let config = match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                tracing::info!(path = %path, "Loading stream configuration");
                Self::from_yaml_file(&path)?
            }
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            bail!("table_name must not be empty");
        }
        if self.interval_ms == 0 {
            bail!("interval_ms must be greater than zero");
        }
        if self.failure_policy.attempts() == 0 {
            bail!("retry policy needs at least one attempt");
        }
        if self.max_consecutive_failures == Some(0) {
            bail!("max_consecutive_failures must be at least 1 when set");
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
