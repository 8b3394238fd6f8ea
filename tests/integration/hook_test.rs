//! Hook execution integration tests.

use std::time::Duration;

use tabletmgr_core::error::ErrorKind;
use tabletmgr_core::traits::store::CoordinationStore;
use tabletmgr_core::types::hook::{ExitStatus, Hook};

use crate::helpers::{TestApp, hook_result};

fn reply_dir(app: &TestApp) -> String {
    format!("{}/action_reply", app.tablet.path())
}

#[tokio::test]
async fn test_backup_returns_result_and_removes_reply() {
    let app = TestApp::new().await;
    let agent = app.spawn_agent(|_| Some(hook_result(ExitStatus::Success, "ok", "")));

    let result = app
        .wrangler
        .execute_hook(app.tablet.path(), &Hook::new("backup"))
        .await
        .unwrap();

    assert_eq!(result, hook_result(ExitStatus::Success, "ok", ""));
    assert!(app.store.children(&reply_dir(&app)).await.unwrap().is_empty());
    agent.abort();
}

#[tokio::test]
async fn test_parameters_reach_the_agent() {
    let app = TestApp::new().await;
    let agent = app.spawn_agent(|hook| {
        let target = hook.parameters.get("target").cloned().unwrap_or_default();
        Some(hook_result(ExitStatus::Success, &target, ""))
    });

    let hook = Hook::new("backup").with_parameter("target", "s3://bucket/nyc");
    let result = app
        .wrangler
        .execute_hook(app.tablet.path(), &hook)
        .await
        .unwrap();

    assert_eq!(result.stdout, "s3://bucket/nyc");
    agent.abort();
}

#[tokio::test]
async fn test_failed_hook_result_is_returned_not_raised() {
    let app = TestApp::new().await;
    let agent = app.spawn_agent(|_| Some(hook_result(ExitStatus::Failure(2), "", "no space")));

    let result = app
        .wrangler
        .execute_tablet_info_hook(&app.tablet, &Hook::new("backup"))
        .await
        .unwrap();

    assert_eq!(result.exit_status, ExitStatus::Failure(2));
    assert_eq!(result.stderr, "no space");
    agent.abort();
}

#[tokio::test]
async fn test_invalid_name_queues_nothing() {
    let app = TestApp::new().await;

    let err = app
        .wrangler
        .execute_hook(app.tablet.path(), &Hook::new("../../bin/sh"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    let actions = app
        .store
        .children(&format!("{}/action", app.tablet.path()))
        .await
        .unwrap();
    assert!(actions.is_empty());
}

#[tokio::test]
async fn test_unknown_tablet_is_not_found() {
    let app = TestApp::new().await;

    let err = app
        .wrangler
        .execute_hook("/zk/nyc/vt/tablets/0000000404", &Hook::new("backup"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_no_agent_times_out_and_leaves_action_queued() {
    let app = TestApp::new().await;
    let wrangler = app
        .wrangler
        .clone()
        .with_hook_timeout(Duration::from_millis(50));

    let err = wrangler
        .execute_tablet_info_hook(&app.tablet, &Hook::new("backup"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Timeout);
    assert_eq!(app.queue.pending(&app.tablet).await.unwrap().len(), 1);
    assert!(app.store.children(&reply_dir(&app)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_calls_get_their_own_results() {
    let app = TestApp::new().await;
    let agent = app.spawn_agent(|hook| Some(hook_result(ExitStatus::Success, &hook.name, "")));

    let backup = Hook::new("backup");
    let snapshot = Hook::new("snapshot");
    let (first, second) = tokio::join!(
        app.wrangler.execute_tablet_info_hook(&app.tablet, &backup),
        app.wrangler.execute_tablet_info_hook(&app.tablet, &snapshot),
    );

    assert_eq!(first.unwrap().stdout, "backup");
    assert_eq!(second.unwrap().stdout, "snapshot");
    assert!(app.store.children(&reply_dir(&app)).await.unwrap().is_empty());
    agent.abort();
}
