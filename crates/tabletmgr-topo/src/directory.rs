//! Tablet directory backed by the coordination store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use tabletmgr_core::error::{AppError, ErrorKind};
use tabletmgr_core::result::AppResult;
use tabletmgr_core::traits::directory::NodeDirectory;
use tabletmgr_core::traits::store::CoordinationStore;
use tabletmgr_core::types::tablet::{Tablet, TabletInfo};

/// Resolves tablet paths by reading the JSON tablet records kept in the
/// coordination store.
#[derive(Debug, Clone)]
pub struct TopoNodeDirectory {
    /// Store holding the tablet records.
    store: Arc<dyn CoordinationStore>,
}

impl TopoNodeDirectory {
    /// Create a directory over the given store.
    pub fn new(store: Arc<dyn CoordinationStore>) -> Self {
        Self { store }
    }

    /// Write (or replace) the tablet record at `tablet_path`.
    pub async fn put_tablet(&self, tablet_path: &str, tablet: &Tablet) -> AppResult<TabletInfo> {
        validate_tablet_path(tablet_path)?;
        let data = serde_json::to_vec(tablet)?;
        self.store.set(tablet_path, &data).await?;
        debug!(tablet_path, alias = %tablet.alias(), "Stored tablet record");
        Ok(TabletInfo::new(tablet_path, tablet.clone()))
    }
}

#[async_trait]
impl NodeDirectory for TopoNodeDirectory {
    async fn resolve(&self, tablet_path: &str) -> AppResult<TabletInfo> {
        validate_tablet_path(tablet_path)?;

        let data = self
            .store
            .get(tablet_path)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tablet not found: {tablet_path}")))?;

        let tablet: Tablet = serde_json::from_slice(&data).map_err(|e| {
            AppError::with_source(
                ErrorKind::Decode,
                format!("Malformed tablet record at {tablet_path}: {e}"),
                e,
            )
        })?;

        Ok(TabletInfo::new(tablet_path, tablet))
    }
}

fn validate_tablet_path(tablet_path: &str) -> AppResult<()> {
    if !tablet_path.starts_with('/') {
        return Err(AppError::validation(format!(
            "Tablet path must be absolute: '{tablet_path}'"
        )));
    }
    Ok(())
}
