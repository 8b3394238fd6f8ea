//! Hook execution on tablets.
//!
//! A hook call is a strict sequence: submit the action, wait for it, read
//! the reply record, decode it, then clean the reply up. Each step has one
//! failure mode and the first failure ends the call.

use tracing::{debug, info, warn};

use tabletmgr_core::error::{AppError, ErrorKind, HookFailure};
use tabletmgr_core::result::AppResult;
use tabletmgr_core::types::action::{ActionPath, parent_path};
use tabletmgr_core::types::hook::{ExitStatus, Hook, HookResult};
use tabletmgr_core::types::tablet::TabletInfo;

use crate::wrangler::Wrangler;

/// Name of the reply record an agent writes after running a hook.
pub const HOOK_REPLY_NAME: &str = "hook_result.json";

impl Wrangler {
    /// Run `hook` on the tablet stored at `tablet_path` and return its result.
    ///
    /// The hook name is checked before anything is read or queued.
    pub async fn execute_hook(&self, tablet_path: &str, hook: &Hook) -> AppResult<HookResult> {
        hook.validate()?;
        let tablet = self.directory.resolve(tablet_path).await?;
        self.execute_tablet_info_hook(&tablet, hook).await
    }

    /// Run `hook` on an already resolved tablet and return its result.
    pub async fn execute_tablet_info_hook(
        &self,
        tablet: &TabletInfo,
        hook: &Hook,
    ) -> AppResult<HookResult> {
        let action = self
            .queue
            .submit(tablet, hook, HOOK_REPLY_NAME)
            .await?;
        debug!(%action, hook = %hook.name, "Hook submitted");

        self.queue
            .wait_for_completion(&action, self.hook_timeout())
            .await?;
        debug!(%action, "Hook action completed");

        let reply_path = action.reply_path(HOOK_REPLY_NAME);
        let data = self.fetch_reply(&action, &reply_path).await?;
        let result = HookResult::from_slice(&data)?;

        self.cleanup_reply(&reply_path).await;
        Ok(result)
    }

    /// Run `hook` on a tablet, tolerating a hook that is not installed there.
    ///
    /// Returns an error only when the call itself fails or the hook ran and
    /// exited with a failure code.
    pub async fn execute_optional_tablet_info_hook(
        &self,
        tablet: &TabletInfo,
        hook: &Hook,
    ) -> AppResult<()> {
        let result = self.execute_tablet_info_hook(tablet, hook).await?;

        match result.exit_status {
            ExitStatus::Success => Ok(()),
            ExitStatus::DoesNotExist => {
                info!("Hook {} doesn't exist on tablet {}", hook.name, tablet.path());
                Ok(())
            }
            ExitStatus::Failure(code) => Err(AppError::hook_execution(HookFailure {
                hook: hook.name.clone(),
                code,
                stderr: result.stderr,
            })),
        }
    }

    async fn fetch_reply(&self, action: &ActionPath, reply_path: &str) -> AppResult<Vec<u8>> {
        match self.store.get(reply_path).await {
            Ok(Some(data)) => Ok(data),
            Ok(None) => Err(AppError::result_unavailable(format!(
                "Action {action} completed without writing {reply_path}"
            ))),
            Err(e) => Err(AppError::with_source(
                ErrorKind::ResultUnavailable,
                format!("Cannot read action reply {reply_path}"),
                e,
            )),
        }
    }

    /// Remove the reply directory. Failures are logged and swallowed: the
    /// result has already been read.
    async fn cleanup_reply(&self, reply_path: &str) {
        let Some(reply_dir) = parent_path(reply_path) else {
            warn!("Action reply {} has no parent to delete", reply_path);
            return;
        };
        if let Err(e) = self.store.delete_recursive(reply_dir).await {
            warn!("Cannot delete action reply {}: {}", reply_path, e);
        }
    }
}
