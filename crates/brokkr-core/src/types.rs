//! Runtime configuration types for operational parameters

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry policy for a deadline-bounded operation
///
/// The interval is the fixed delay between attempts; the timeout is the
/// wall-clock deadline for the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RetryPolicy {
    /// Fixed delay between attempts in milliseconds
    #[serde(default = "default_interval")]
    pub interval_ms: u64,

    /// Wall-clock deadline for the whole sequence in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

impl RetryPolicy {
    /// Create a policy from explicit durations
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval_ms: interval.as_millis() as u64,
            timeout_ms: timeout.as_millis() as u64,
        }
    }

    /// Delay between attempts
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Wall-clock deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval_ms: default_interval(),
            timeout_ms: default_timeout(),
        }
    }
}

fn default_interval() -> u64 {
    10_000 // 10 seconds
}
fn default_timeout() -> u64 {
    300_000 // 5 minutes
}
