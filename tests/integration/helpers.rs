//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use tabletmgr_actions::TopoActionQueue;
use tabletmgr_actions::node::EXECUTE_HOOK;
use tabletmgr_core::config::{ActionConfig, AppConfig};
use tabletmgr_core::traits::store::CoordinationStore;
use tabletmgr_core::types::hook::{ExitStatus, Hook, HookResult};
use tabletmgr_core::types::tablet::{Tablet, TabletInfo, TabletType};
use tabletmgr_topo::memory::MemoryTopoStore;
use tabletmgr_topo::{TopoNodeDirectory, keys};
use tabletmgr_wrangler::Wrangler;

/// Test application context
pub struct TestApp {
    /// Shared in-memory coordination store
    pub store: Arc<MemoryTopoStore>,
    /// Action queue over the store
    pub queue: Arc<TopoActionQueue>,
    /// Hook runner under test
    pub wrangler: Wrangler,
    /// The registered tablet
    pub tablet: TabletInfo,
}

impl TestApp {
    /// Create a test application with one registered tablet
    pub async fn new() -> Self {
        let config = AppConfig::default();
        let store = Arc::new(MemoryTopoStore::new(&config.topo.memory));
        let shared: Arc<dyn CoordinationStore> = store.clone();

        let directory = Arc::new(TopoNodeDirectory::new(Arc::clone(&shared)));
        let queue = Arc::new(TopoActionQueue::new(
            Arc::clone(&shared),
            &ActionConfig {
                poll_interval_ms: 5,
            },
        ));
        let wrangler = Wrangler::new(directory.clone(), queue.clone(), shared)
            .with_hook_timeout(Duration::from_secs(5));

        let tablet = directory
            .put_tablet(&keys::tablet_path("nyc", 62344), &make_tablet())
            .await
            .expect("Failed to register tablet");

        Self {
            store,
            queue,
            wrangler,
            tablet,
        }
    }

    /// Start a simulated tablet agent that answers every queued hook with
    /// the output of `run`. `None` means the hook is not installed.
    pub fn spawn_agent<F>(&self, run: F) -> JoinHandle<()>
    where
        F: Fn(&Hook) -> Option<HookResult> + Send + 'static,
    {
        let queue = Arc::clone(&self.queue);
        let store = Arc::clone(&self.store);
        let tablet = self.tablet.clone();

        tokio::spawn(async move {
            loop {
                let pending = queue.pending(&tablet).await.expect("Failed to list actions");
                for action in pending {
                    let node = queue.read(&action).await.expect("Failed to read action");
                    assert_eq!(node.action, EXECUTE_HOOK);
                    queue.start(&action).await.expect("Failed to start action");

                    let hook: Hook = serde_json::from_value(node.args).expect("Bad hook args");
                    let result = run(&hook).unwrap_or(HookResult {
                        exit_status: ExitStatus::DoesNotExist,
                        stdout: String::new(),
                        stderr: String::new(),
                    });
                    let reply = serde_json::to_vec(&result).expect("Failed to encode reply");
                    store
                        .set(&action.reply_path(&node.reply_name), &reply)
                        .await
                        .expect("Failed to write reply");
                    queue.complete(&action).await.expect("Failed to complete action");
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
    }
}

/// A replica tablet record
pub fn make_tablet() -> Tablet {
    Tablet {
        cell: "nyc".to_string(),
        uid: 62344,
        hostname: "db-62344".to_string(),
        addr: "db-62344:6700".to_string(),
        keyspace: "main".to_string(),
        shard: "-80".to_string(),
        tablet_type: TabletType::Replica,
    }
}

/// A hook result with the given status and output
pub fn hook_result(exit_status: ExitStatus, stdout: &str, stderr: &str) -> HookResult {
    HookResult {
        exit_status,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    }
}
