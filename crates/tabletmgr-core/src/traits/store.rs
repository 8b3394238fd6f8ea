//! Coordination store trait for pluggable hierarchical key-value backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// A shared, hierarchical key-value store (the topology server).
///
/// Paths are `/`-separated. A path is a "directory" of every record whose
/// path starts with it followed by `/`.
#[async_trait]
pub trait CoordinationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read the record at `path`. Returns `None` if it does not exist.
    async fn get(&self, path: &str) -> AppResult<Option<Vec<u8>>>;

    /// Create or overwrite the record at `path`.
    async fn set(&self, path: &str, data: &[u8]) -> AppResult<()>;

    /// Delete the record at `path` and every record below it.
    /// Returns the number of records removed.
    async fn delete_recursive(&self, path: &str) -> AppResult<u64>;

    /// List the names of the direct children of `path`, sorted.
    async fn children(&self, path: &str) -> AppResult<Vec<String>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
