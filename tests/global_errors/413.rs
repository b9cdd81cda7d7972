//! tests/global_errors/413.rs
//! Ensures that posting metrics larger than the body limit triggers 413.

#[path = "../mod.rs"]
mod common;

use content_site::config::EnvironmentVariables;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let base_url: String = common::spawn_app();

    let limit: usize = EnvironmentVariables::instance().max_request_body_size;
    let oversized_payload: Vec<u8> = vec![b'X'; limit + 100];

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/metrics", base_url))
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["code"], 413);
}
