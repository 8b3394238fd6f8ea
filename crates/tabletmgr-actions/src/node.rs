//! Action node model and lifecycle states.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action name under which hook requests are queued.
pub const EXECUTE_HOOK: &str = "ExecuteHook";

/// Lifecycle state of a queued action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionState {
    /// Written to the queue, not yet picked up by the agent.
    Queued,
    /// Picked up and currently being run by the agent.
    Running,
    /// Finished; any reply records have been written.
    Done,
    /// The agent could not run the action.
    Failed,
}

impl ActionState {
    /// Check if the action is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Return the state as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One action as stored in the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionNode {
    /// Unique action identifier; also the last segment of the action path.
    pub id: Uuid,
    /// Action name, e.g. [`EXECUTE_HOOK`].
    pub action: String,
    /// Action arguments (JSON).
    pub args: serde_json::Value,
    /// Name of the reply record the agent writes on completion.
    pub reply_name: String,
    /// Current lifecycle state.
    pub state: ActionState,
    /// Error reported by the agent when the action failed.
    #[serde(default)]
    pub error: Option<String>,
    /// When the action was queued.
    pub created_at: DateTime<Utc>,
    /// When the action was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ActionNode {
    /// Create a freshly queued action.
    pub fn new(id: Uuid, action: &str, args: serde_json::Value, reply_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            action: action.to_string(),
            args,
            reply_name: reply_name.to_string(),
            state: ActionState::Queued,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }
}
