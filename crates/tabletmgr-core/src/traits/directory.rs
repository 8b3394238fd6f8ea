//! Node directory trait: turns a tablet reference into its descriptor.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::tablet::TabletInfo;

/// Resolves tablet paths to tablet descriptors.
#[async_trait]
pub trait NodeDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Read the tablet record at `tablet_path`.
    ///
    /// Fails with a `NotFound` error if no such tablet exists.
    async fn resolve(&self, tablet_path: &str) -> AppResult<TabletInfo>;
}
