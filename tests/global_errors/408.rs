//! tests/global_errors/408.rs
//! Ensures that requests taking too long result in a 408 timeout.

#[path = "../mod.rs"]
mod common;

use axum::{routing::get, Router};
use content_site::config::{AppState, EnvironmentVariables};
use content_site::core::server::with_middleware;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let mut env: EnvironmentVariables = EnvironmentVariables::instance().clone();
    env.default_timeout_seconds = 1;

    // A route that outlives the one second budget
    let router: Router<AppState> = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "too late"
        }),
    );
    let app: Router = with_middleware(router, &env).with_state(AppState::new(env.clone()));
    let base_url: String = common::spawn_router(app);

    let resp_result = timeout(
        Duration::from_secs(5), // client-side timeout duration
        reqwest::Client::new().get(format!("{}/slow", base_url)).send(),
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}
