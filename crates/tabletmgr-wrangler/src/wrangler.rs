//! The wrangler: tablet management operations over shared collaborators.

use std::sync::Arc;
use std::time::Duration;

use tabletmgr_core::config::HookConfig;
use tabletmgr_core::traits::directory::NodeDirectory;
use tabletmgr_core::traits::queue::ActionQueue;
use tabletmgr_core::traits::store::CoordinationStore;

/// Runs management operations against tablets.
///
/// Holds no per-call state; concurrent calls only share the injected
/// collaborators.
#[derive(Debug, Clone)]
pub struct Wrangler {
    /// Resolves tablet paths to tablet records
    pub(crate) directory: Arc<dyn NodeDirectory>,
    /// Delivers actions to tablet agents
    pub(crate) queue: Arc<dyn ActionQueue>,
    /// Store holding the reply records
    pub(crate) store: Arc<dyn CoordinationStore>,
    /// Deadline for a hook action to complete
    hook_timeout: Duration,
}

impl Wrangler {
    /// Create a wrangler with the default hook timeout of ten minutes
    pub fn new(
        directory: Arc<dyn NodeDirectory>,
        queue: Arc<dyn ActionQueue>,
        store: Arc<dyn CoordinationStore>,
    ) -> Self {
        Self {
            directory,
            queue,
            store,
            hook_timeout: HookConfig::default().timeout(),
        }
    }

    /// Apply hook settings from configuration
    pub fn with_hook_config(self, config: &HookConfig) -> Self {
        self.with_hook_timeout(config.timeout())
    }

    /// Override how long hook calls wait for the remote action
    pub fn with_hook_timeout(mut self, timeout: Duration) -> Self {
        self.hook_timeout = timeout;
        self
    }

    /// Deadline applied to hook calls
    pub fn hook_timeout(&self) -> Duration {
        self.hook_timeout
    }
}
