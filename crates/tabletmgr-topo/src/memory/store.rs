//! In-memory coordination store using the moka crate.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use tabletmgr_core::config::topo::MemoryTopoConfig;
use tabletmgr_core::result::AppResult;
use tabletmgr_core::traits::store::CoordinationStore;

/// In-memory coordination store for development and tests.
///
/// State lives in this process only. Records are kept until deleted unless
/// [`MemoryTopoConfig`] opts into a capacity bound or a time-to-live.
#[derive(Debug, Clone)]
pub struct MemoryTopoStore {
    /// The underlying moka cache, keyed by full path.
    records: Cache<String, Vec<u8>>,
}

impl MemoryTopoStore {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryTopoConfig) -> Self {
        let mut builder = Cache::builder();
        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }
        if let Some(ttl) = config.time_to_live_seconds {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }
        let records = builder.build();

        Self { records }
    }

    /// Collect every stored path equal to `path` or below it.
    fn paths_under(&self, path: &str) -> Vec<String> {
        let dir = format!("{}/", path.trim_end_matches('/'));
        self.records
            .iter()
            .filter(|entry| entry.0.as_str() == path || entry.0.starts_with(&dir))
            .map(|entry| entry.0.to_string())
            .collect()
    }
}

impl Default for MemoryTopoStore {
    fn default() -> Self {
        Self::new(&MemoryTopoConfig::default())
    }
}

#[async_trait]
impl CoordinationStore for MemoryTopoStore {
    async fn get(&self, path: &str) -> AppResult<Option<Vec<u8>>> {
        Ok(self.records.get(path).await)
    }

    async fn set(&self, path: &str, data: &[u8]) -> AppResult<()> {
        self.records.insert(path.to_string(), data.to_vec()).await;
        Ok(())
    }

    async fn delete_recursive(&self, path: &str) -> AppResult<u64> {
        let mut count = 0u64;
        for key in self.paths_under(path) {
            if self.records.remove(&key).await.is_some() {
                count += 1;
            }
        }

        debug!(path, count, "Deleted records recursively");
        Ok(count)
    }

    async fn children(&self, path: &str) -> AppResult<Vec<String>> {
        let dir = format!("{}/", path.trim_end_matches('/'));
        let names: BTreeSet<String> = self
            .records
            .iter()
            .filter_map(|entry| {
                entry
                    .0
                    .strip_prefix(&dir)
                    .and_then(|rest| rest.split('/').next())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            })
            .collect();
        Ok(names.into_iter().collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
