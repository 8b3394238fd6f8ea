//! Action queue trait: asynchronous delivery of hook requests to tablets.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::action::ActionPath;
use crate::types::hook::Hook;
use crate::types::tablet::TabletInfo;

/// Queues actions for a tablet's agent and reports when they complete.
#[async_trait]
pub trait ActionQueue: Send + Sync + std::fmt::Debug + 'static {
    /// Queue `hook` for execution on `tablet`. The agent writes its result
    /// to the reply record named `reply_name` derived from the returned path.
    ///
    /// Fails with a `Submission` error if the action cannot be queued.
    async fn submit(
        &self,
        tablet: &TabletInfo,
        hook: &Hook,
        reply_name: &str,
    ) -> AppResult<ActionPath>;

    /// Wait until the action has completed.
    ///
    /// Fails with a `Timeout` error once `timeout` has elapsed. The remote
    /// side is not cancelled and may still complete later.
    async fn wait_for_completion(&self, action: &ActionPath, timeout: Duration) -> AppResult<()>;
}
