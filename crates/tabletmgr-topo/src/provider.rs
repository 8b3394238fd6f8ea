//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use tabletmgr_core::config::topo::TopoConfig;
use tabletmgr_core::error::AppError;
use tabletmgr_core::result::AppResult;
use tabletmgr_core::traits::store::CoordinationStore;

/// Coordination store manager that wraps the configured backend.
#[derive(Debug, Clone)]
pub struct TopoManager {
    /// The inner store backend.
    inner: Arc<dyn CoordinationStore>,
}

impl TopoManager {
    /// Create a new store manager from configuration.
    ///
    /// The backend must pass its health check before the manager is returned.
    pub async fn new(config: &TopoConfig) -> AppResult<Self> {
        let inner: Arc<dyn CoordinationStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis coordination store");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisTopoStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory coordination store");
                Arc::new(crate::memory::MemoryTopoStore::new(&config.memory))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown topo provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Self::verified(inner, &config.provider).await
    }

    /// Wrap `inner` once it answers its health check.
    async fn verified(inner: Arc<dyn CoordinationStore>, provider: &str) -> AppResult<Self> {
        if !inner.health_check().await? {
            return Err(AppError::store(format!(
                "Topo provider '{provider}' failed its health check"
            )));
        }
        Ok(Self { inner })
    }

    /// Get a shared handle to the inner backend.
    pub fn store(&self) -> Arc<dyn CoordinationStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl CoordinationStore for TopoManager {
    async fn get(&self, path: &str) -> AppResult<Option<Vec<u8>>> {
        self.inner.get(path).await
    }

    async fn set(&self, path: &str, data: &[u8]) -> AppResult<()> {
        self.inner.set(path, data).await
    }

    async fn delete_recursive(&self, path: &str) -> AppResult<u64> {
        self.inner.delete_recursive(path).await
    }

    async fn children(&self, path: &str) -> AppResult<Vec<String>> {
        self.inner.children(path).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
