//! Optional hook integration tests.

use tabletmgr_core::error::ErrorKind;
use tabletmgr_core::types::hook::{ExitStatus, Hook};

use crate::helpers::{TestApp, hook_result};

#[tokio::test]
async fn test_missing_hook_is_not_an_error() {
    let app = TestApp::new().await;
    let agent = app.spawn_agent(|_| None);

    app.wrangler
        .execute_optional_tablet_info_hook(&app.tablet, &Hook::new("preflight_check"))
        .await
        .unwrap();
    agent.abort();
}

#[tokio::test]
async fn test_successful_hook_is_ok() {
    let app = TestApp::new().await;
    let agent = app.spawn_agent(|_| Some(hook_result(ExitStatus::Success, "checked", "")));

    app.wrangler
        .execute_optional_tablet_info_hook(&app.tablet, &Hook::new("preflight_check"))
        .await
        .unwrap();
    agent.abort();
}

#[tokio::test]
async fn test_failing_hook_reports_name_code_and_stderr() {
    let app = TestApp::new().await;
    let agent = app.spawn_agent(|_| Some(hook_result(ExitStatus::Failure(17), "", "boom")));

    let err = app
        .wrangler
        .execute_optional_tablet_info_hook(&app.tablet, &Hook::new("backup"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::HookExecution);
    let message = err.to_string();
    assert!(message.contains("backup"));
    assert!(message.contains("17"));
    assert!(message.contains("boom"));
    agent.abort();
}
