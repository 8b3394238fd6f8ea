//! Action paths and the reply records derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Directory below a tablet record where actions are queued.
pub const ACTION_DIR: &str = "action";

/// Directory below a tablet record where agents write action replies.
pub const ACTION_REPLY_DIR: &str = "action_reply";

/// Identifies one submitted action: `<tablet path>/action/<id>`.
///
/// A fresh path is minted for every submission and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionPath(String);

impl ActionPath {
    /// Mint a new, unique action path below the given tablet record.
    pub fn generate(tablet_path: &str) -> Self {
        Self::for_id(tablet_path, Uuid::new_v4())
    }

    /// Build the action path for a known action id.
    pub fn for_id(tablet_path: &str, id: Uuid) -> Self {
        Self(format!(
            "{}/{ACTION_DIR}/{id}",
            tablet_path.trim_end_matches('/')
        ))
    }

    /// Return the full path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the last path segment, the action id.
    pub fn action_id(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Return the tablet record path the action was queued under.
    pub fn tablet_path(&self) -> &str {
        let suffix = format!("/{ACTION_DIR}/{}", self.action_id());
        self.0.strip_suffix(&suffix).unwrap_or(&self.0)
    }

    /// Path where the remote agent writes the reply named `reply_name`.
    ///
    /// The agent derives the same path, so both sides agree on it without
    /// exchanging anything beyond the action path.
    pub fn reply_path(&self, reply_name: &str) -> String {
        format!(
            "{}/{ACTION_REPLY_DIR}/{}/{reply_name}",
            self.tablet_path(),
            self.action_id()
        )
    }
}

impl fmt::Display for ActionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ActionPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Return the parent directory of a store path, or `None` for a root entry.
pub fn parent_path(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => None,
        Some(idx) => Some(&trimmed[..idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLET: &str = "/zk/nyc/vt/tablets/0000062344";

    #[test]
    fn test_action_path_layout() {
        let action = ActionPath::for_id(TABLET, Uuid::nil());
        assert_eq!(
            action.as_str(),
            "/zk/nyc/vt/tablets/0000062344/action/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(action.tablet_path(), TABLET);
        assert_eq!(action.action_id(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_reply_path_is_below_unique_dir() {
        let action = ActionPath::for_id(TABLET, Uuid::nil());
        let reply = action.reply_path("hook_result.json");
        assert_eq!(
            reply,
            "/zk/nyc/vt/tablets/0000062344/action_reply/00000000-0000-0000-0000-000000000000/hook_result.json"
        );
        assert_eq!(
            parent_path(&reply),
            Some("/zk/nyc/vt/tablets/0000062344/action_reply/00000000-0000-0000-0000-000000000000")
        );
    }

    #[test]
    fn test_generated_paths_differ() {
        assert_ne!(ActionPath::generate(TABLET), ActionPath::generate(TABLET));
    }

    #[test]
    fn test_parent_of_root_entry() {
        assert_eq!(parent_path("/zk"), None);
        assert_eq!(parent_path("zk"), None);
    }
}
