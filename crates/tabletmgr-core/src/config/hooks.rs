//! Hook invocation configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for remote hook invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookConfig {
    /// How long to wait for a submitted hook action to complete, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl HookConfig {
    /// Return the completion deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    600
}
