//! Action queue configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the store-backed action queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Interval in milliseconds between polls of a pending action node.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

impl ActionConfig {
    /// Return the poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
        }
    }
}

fn default_poll_interval() -> u64 {
    500
}
