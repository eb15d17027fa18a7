//! Integration tests for the agent health checker.

use std::time::Duration;

use nomad_health::{CheckState, Client, ClientError, Status, HEALTH_ENDPOINT, SERVICE_NAME};

mod common;

#[tokio::test]
async fn checker_reports_ok_for_healthy_agent() {
    let addr = common::start_mock_agent(200, "ok").await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();
    let mut state = CheckState::new(SERVICE_NAME);

    let result = client.checker(&mut state).await;

    assert!(result.is_ok());
    assert_eq!(state.status(), Some(Status::Ok));
    assert_eq!(state.status_code(), 200);
    assert_eq!(state.message(), Some("Nomad is ok"));
    assert!(state.last_success().is_some());
    assert!(state.last_failure().is_none());
}

#[tokio::test]
async fn checker_reports_critical_for_reachable_non_200() {
    let addr = common::start_mock_agent(204, "").await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();
    let mut state = CheckState::new(SERVICE_NAME);

    let err = client.checker(&mut state).await.unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedReturnCode));
    assert_eq!(err.to_string(), "unexpected return code");
    assert_eq!(state.status(), Some(Status::Critical));
    assert_eq!(state.status_code(), 204);
    assert_eq!(
        state.message(),
        Some("Nomad functionality is unavailable or non-functioning")
    );
}

#[tokio::test]
async fn checker_reports_critical_with_server_error_code() {
    let addr = common::start_mock_agent(500, "boom").await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();
    let mut state = CheckState::new(SERVICE_NAME);

    let err = client.checker(&mut state).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::UnexpectedResponse { actual: 500, .. }
    ));
    assert_eq!(state.status(), Some(Status::Critical));
    assert_eq!(state.status_code(), 500);
}

#[tokio::test]
async fn checker_reports_critical_for_unreachable_agent() {
    let addr = common::unused_addr().await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();
    let mut state = CheckState::new(SERVICE_NAME);

    let err = client.checker(&mut state).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(state.status(), Some(Status::Critical));
    assert_eq!(state.status_code(), 0);
    assert!(state.last_failure().is_some());
}

#[tokio::test]
async fn checker_times_out_against_stalled_agent() {
    let addr = common::start_stalling_agent(Duration::from_secs(5)).await;
    let client = Client::with_timeout(
        &format!("http://{}", addr),
        None,
        false,
        Duration::from_millis(200),
    )
    .unwrap();
    let mut state = CheckState::new(SERVICE_NAME);

    let err = client.checker(&mut state).await.unwrap_err();

    match &err {
        ClientError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected transport timeout, got {:?}", other),
    }
    assert_eq!(state.status(), Some(Status::Critical));
    assert_eq!(state.status_code(), 0);
}

#[tokio::test]
async fn probe_accepts_rate_limited_agent() {
    let addr = common::start_mock_agent(429, "slow down").await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();

    let code = client.get(HEALTH_ENDPOINT).await.unwrap();
    assert_eq!(code, 429);
}

#[tokio::test]
async fn probe_accepts_redirect_status() {
    let addr = common::start_mock_agent(302, "").await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();

    let code = client.get(HEALTH_ENDPOINT).await.unwrap();
    assert_eq!(code, 302);
}

#[tokio::test]
async fn probe_rejects_server_error_with_diagnostics() {
    let addr = common::start_mock_agent(500, "boom").await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();

    let err = client.get(HEALTH_ENDPOINT).await.unwrap_err();

    match err {
        ClientError::UnexpectedResponse {
            expected,
            actual,
            path,
        } => {
            assert_eq!(expected, 200);
            assert_eq!(actual, 500);
            assert_eq!(path, "/v1/agent/health");
        }
        other => panic!("expected UnexpectedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn repeated_probes_reuse_one_handle() {
    let addr = common::start_mock_agent(200, "ok").await;
    let client = Client::new(&format!("http://{}", addr), None, false).unwrap();
    let mut state = CheckState::new(SERVICE_NAME);

    for _ in 0..3 {
        client.checker(&mut state).await.unwrap();
    }

    assert_eq!(state.status(), Some(Status::Ok));
    assert_eq!(state.status_code(), 200);
}
