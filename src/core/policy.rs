//! What the stream does after a write fails

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    500
}

/// Failure strategy applied by the driver loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Drop the record and move on to the next one
    #[default]
    LogAndContinue,

    /// Re-issue the same record with doubling backoff, then drop it
    Retry {
        /// Total attempts, including the first
        #[serde(default = "default_max_attempts")]
        max_attempts: u32,
        #[serde(default = "default_initial_backoff_ms")]
        initial_backoff_ms: u64,
    },

    /// Stop the stream and return the failure
    Escalate,
}

impl FailurePolicy {
    /// Total attempts made for one record
    pub fn attempts(&self) -> u32 {
        match self {
            FailurePolicy::Retry { max_attempts, .. } => *max_attempts,
            _ => 1,
        }
    }

    /// Delay before attempt `attempt + 1`, where `attempt` counts from 1
    pub fn backoff(&self, attempt: u32) -> Duration {
        match self {
            FailurePolicy::Retry {
                initial_backoff_ms, ..
            } => {
                let factor = 1u64.checked_shl(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
                Duration::from_millis(initial_backoff_ms.saturating_mul(factor))
            }
            _ => Duration::ZERO,
        }
    }

    pub fn escalates(&self) -> bool {
        matches!(self, FailurePolicy::Escalate)
    }
}
