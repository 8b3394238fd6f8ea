//! Tablet descriptor types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a tablet plays in its shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabletType {
    /// Idle tablet, not serving.
    Idle,
    /// Primary tablet of its shard.
    Master,
    /// Serving replica.
    Replica,
    /// Read-only replica for batch workloads.
    Rdonly,
    /// Spare replica, not serving.
    Spare,
    /// Taking a backup.
    Backup,
    /// Being restored from a backup.
    Restore,
    /// Removed from the topology.
    Scrap,
}

impl TabletType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Master => "master",
            Self::Replica => "replica",
            Self::Rdonly => "rdonly",
            Self::Spare => "spare",
            Self::Backup => "backup",
            Self::Restore => "restore",
            Self::Scrap => "scrap",
        }
    }
}

impl fmt::Display for TabletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The tablet record as stored in the coordination store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tablet {
    /// Cell the tablet lives in.
    pub cell: String,
    /// Unique id of the tablet within its cell.
    pub uid: u32,
    /// Host running the tablet agent.
    pub hostname: String,
    /// `host:port` address of the tablet agent.
    pub addr: String,
    /// Keyspace served by the tablet.
    #[serde(default)]
    pub keyspace: String,
    /// Shard served by the tablet.
    #[serde(default)]
    pub shard: String,
    /// Current tablet role.
    pub tablet_type: TabletType,
}

impl Tablet {
    /// Return the `cell-uid` alias of this tablet.
    pub fn alias(&self) -> String {
        format!("{}-{:010}", self.cell, self.uid)
    }
}

/// A tablet record together with the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabletInfo {
    /// Path of the tablet record in the coordination store.
    path: String,
    /// The tablet record itself.
    pub tablet: Tablet,
}

impl TabletInfo {
    /// Wrap a tablet record read from `path`.
    pub fn new(path: impl Into<String>, tablet: Tablet) -> Self {
        Self {
            path: path.into(),
            tablet,
        }
    }

    /// Path of the tablet record. Actions for the tablet are queued below it.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for TabletInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tablet.alias(), self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_is_zero_padded() {
        let tablet = Tablet {
            cell: "nyc".to_string(),
            uid: 62344,
            hostname: "db1".to_string(),
            addr: "db1:6700".to_string(),
            keyspace: "main".to_string(),
            shard: "0".to_string(),
            tablet_type: TabletType::Replica,
        };
        assert_eq!(tablet.alias(), "nyc-0000062344");
    }

    #[test]
    fn test_tablet_type_serializes_lowercase() {
        let value = serde_json::to_value(TabletType::Rdonly).unwrap();
        assert_eq!(value, "rdonly");
    }
}
