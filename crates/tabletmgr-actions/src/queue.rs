//! Action queue kept in the coordination store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::time;
use tracing;
use uuid::Uuid;

use tabletmgr_core::config::ActionConfig;
use tabletmgr_core::error::{AppError, ErrorKind};
use tabletmgr_core::result::AppResult;
use tabletmgr_core::traits::queue::ActionQueue;
use tabletmgr_core::traits::store::CoordinationStore;
use tabletmgr_core::types::action::{ACTION_DIR, ActionPath};
use tabletmgr_core::types::hook::Hook;
use tabletmgr_core::types::tablet::TabletInfo;

use crate::node::{ActionNode, ActionState, EXECUTE_HOOK};

/// Action queue that writes action nodes below tablet records and polls
/// them until the agent marks them finished.
#[derive(Debug, Clone)]
pub struct TopoActionQueue {
    /// Store holding the action nodes
    store: Arc<dyn CoordinationStore>,
    /// Delay between polls of a pending action
    poll_interval: Duration,
}

impl TopoActionQueue {
    /// Create a new action queue
    pub fn new(store: Arc<dyn CoordinationStore>, config: &ActionConfig) -> Self {
        Self {
            store,
            poll_interval: config.poll_interval(),
        }
    }

    /// Read and decode the action node at `action`
    pub async fn read(&self, action: &ActionPath) -> AppResult<ActionNode> {
        let data = self
            .store
            .get(action.as_str())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Action node vanished: {action}")))?;
        let node = serde_json::from_slice(&data).map_err(|e| {
            AppError::with_source(
                ErrorKind::Decode,
                format!("Malformed action node at {action}: {e}"),
                e,
            )
        })?;
        Ok(node)
    }

    /// List the actions still queued or running for a tablet
    pub async fn pending(&self, tablet: &TabletInfo) -> AppResult<Vec<ActionPath>> {
        let dir = format!("{}/{ACTION_DIR}", tablet.path());
        let mut pending = Vec::new();
        for name in self.store.children(&dir).await? {
            let Ok(id) = Uuid::parse_str(&name) else {
                tracing::warn!("Ignoring unexpected entry '{}' in {}", name, dir);
                continue;
            };
            let action = ActionPath::for_id(tablet.path(), id);
            if !self.read(&action).await?.state.is_terminal() {
                pending.push(action);
            }
        }
        Ok(pending)
    }

    /// Mark an action as picked up by the agent
    pub async fn start(&self, action: &ActionPath) -> AppResult<()> {
        self.transition(action, ActionState::Running, None).await
    }

    /// Mark an action as finished successfully
    pub async fn complete(&self, action: &ActionPath) -> AppResult<()> {
        self.transition(action, ActionState::Done, None).await
    }

    /// Mark an action as failed
    pub async fn fail(&self, action: &ActionPath, error: &str) -> AppResult<()> {
        self.transition(action, ActionState::Failed, Some(error.to_string()))
            .await
    }

    async fn transition(
        &self,
        action: &ActionPath,
        state: ActionState,
        error: Option<String>,
    ) -> AppResult<()> {
        let mut node = self.read(action).await?;
        node.state = state;
        node.error = error;
        node.updated_at = Utc::now();
        self.store
            .set(action.as_str(), &serde_json::to_vec(&node)?)
            .await?;

        tracing::debug!("Action {} is now {}", action, state);
        Ok(())
    }

    /// Poll the action node until it reaches a terminal state.
    ///
    /// Read and decode errors are retried until the caller's deadline; only
    /// a vanished node or a failed action end the wait early.
    async fn poll_until_terminal(&self, action: &ActionPath) -> AppResult<()> {
        loop {
            match self.read(action).await {
                Ok(node) => match node.state {
                    ActionState::Done => return Ok(()),
                    ActionState::Failed => {
                        return Err(AppError::submission(format!(
                            "Action {} failed: {}",
                            action,
                            node.error.as_deref().unwrap_or("no error reported")
                        )));
                    }
                    ActionState::Queued | ActionState::Running => {
                        tracing::trace!("Action {} still {}, waiting...", action, node.state);
                    }
                },
                Err(e) if e.is(ErrorKind::NotFound) => return Err(e),
                Err(e) => {
                    tracing::warn!("Cannot read action {}, will retry: {}", action, e);
                }
            }
            time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl ActionQueue for TopoActionQueue {
    async fn submit(
        &self,
        tablet: &TabletInfo,
        hook: &Hook,
        reply_name: &str,
    ) -> AppResult<ActionPath> {
        let id = Uuid::new_v4();
        let action = ActionPath::for_id(tablet.path(), id);
        let args = serde_json::to_value(hook)?;
        let node = ActionNode::new(id, EXECUTE_HOOK, args, reply_name);
        let data = serde_json::to_vec(&node)?;

        self.store
            .set(action.as_str(), &data)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Submission,
                    format!("Failed to queue {} on {}", EXECUTE_HOOK, tablet.path()),
                    e,
                )
            })?;

        tracing::info!(
            "Queued action: path={}, action='{}', hook='{}'",
            action,
            EXECUTE_HOOK,
            hook.name
        );
        Ok(action)
    }

    async fn wait_for_completion(&self, action: &ActionPath, timeout: Duration) -> AppResult<()> {
        match time::timeout(timeout, self.poll_until_terminal(action)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::timeout(format!(
                "Action {} did not complete within {:?}",
                action, timeout
            ))),
        }
    }
}
