//! Coordination store (topology server) configuration.

use serde::{Deserialize, Serialize};

/// Top-level coordination store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopoConfig {
    /// Store provider type: `"memory"` or `"redis"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Redis-specific store configuration.
    #[serde(default)]
    pub redis: RedisTopoConfig,
    /// In-memory store configuration.
    #[serde(default)]
    pub memory: MemoryTopoConfig,
}

impl Default for TopoConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            redis: RedisTopoConfig::default(),
            memory: MemoryTopoConfig::default(),
        }
    }
}

/// Redis store backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisTopoConfig {
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Key prefix for all tabletmgr records.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisTopoConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// In-memory store backend configuration.
///
/// Both limits are off unless set. With either one set the store may drop
/// records it has acknowledged, tablet records included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryTopoConfig {
    /// Maximum number of records held before eviction starts.
    #[serde(default)]
    pub max_capacity: Option<u64>,
    /// Records older than this many seconds are evicted.
    #[serde(default)]
    pub time_to_live_seconds: Option<u64>,
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "tabletmgr:".to_string()
}
