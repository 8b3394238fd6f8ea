//! Redis coordination store implementation.
//!
//! Each record is one Redis string keyed by `<prefix><path>`. Directories
//! are implicit: they are the set of keys sharing a `<path>/` prefix.

use std::collections::BTreeSet;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use tabletmgr_core::error::{AppError, ErrorKind};
use tabletmgr_core::result::AppResult;
use tabletmgr_core::traits::store::CoordinationStore;

use super::client::RedisClient;

/// Redis-backed coordination store.
#[derive(Debug, Clone)]
pub struct RedisTopoStore {
    /// Redis client.
    client: RedisClient,
}

impl RedisTopoStore {
    /// Create a new Redis store.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }

    /// Return every full key stored below `path`.
    ///
    /// Walks the keyspace with `SCAN` so large stores are not blocked.
    async fn keys_below(&self, path: &str) -> AppResult<Vec<String>> {
        let dir = self.client.prefixed_key(path.trim_end_matches('/'));
        let pattern = format!("{}/*", escape_glob(&dir));
        let mut conn = self.client.conn_mut();

        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(Self::map_err)?;
            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }
        Ok(keys)
    }
}

/// Keys requested per `SCAN` round trip.
const SCAN_BATCH: usize = 100;

/// Escape Redis glob metacharacters so `value` matches only itself.
fn escape_glob(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl CoordinationStore for RedisTopoStore {
    async fn get(&self, path: &str) -> AppResult<Option<Vec<u8>>> {
        let full_key = self.client.prefixed_key(path);
        let mut conn = self.client.conn_mut();
        let result: Option<Vec<u8>> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn set(&self, path: &str, data: &[u8]) -> AppResult<()> {
        let full_key = self.client.prefixed_key(path);
        let mut conn = self.client.conn_mut();
        let _: () = conn.set(&full_key, data).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn delete_recursive(&self, path: &str) -> AppResult<u64> {
        let mut keys = self.keys_below(path).await?;
        keys.push(self.client.prefixed_key(path));

        let mut conn = self.client.conn_mut();
        let count: u64 = conn.del(&keys).await.map_err(Self::map_err)?;

        debug!(path, count, "Deleted records recursively");
        Ok(count)
    }

    async fn children(&self, path: &str) -> AppResult<Vec<String>> {
        let dir = format!("{}/", path.trim_end_matches('/'));
        let names: BTreeSet<String> = self
            .keys_below(path)
            .await?
            .iter()
            .filter_map(|key| {
                self.client
                    .unprefixed(key)
                    .strip_prefix(&dir)
                    .and_then(|rest| rest.split('/').next())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            })
            .collect();
        Ok(names.into_iter().collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_glob_plain_path() {
        assert_eq!(escape_glob("tabletmgr:/zk/nyc/vt"), "tabletmgr:/zk/nyc/vt");
    }

    #[test]
    fn test_escape_glob_metacharacters() {
        assert_eq!(escape_glob("/zk/a*b?c"), r"/zk/a\*b\?c");
        assert_eq!(escape_glob("/zk/[ab]"), r"/zk/\[ab\]");
        assert_eq!(escape_glob(r"/zk/a\b"), r"/zk/a\\b");
    }
}
