//! tests/api_routes/games.rs
//! The games endpoint answers every request with the same placeholder.

#[path = "../mod.rs"]
mod common;

use reqwest::{Method, StatusCode};

const EXPECTED: &str = r#"{"message":"TODO: implement /api/games endpoint"}"#;

#[tokio::test]
async fn get_returns_placeholder_message() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/api/games", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(resp.text().await.unwrap(), EXPECTED);
}

#[tokio::test]
async fn any_method_and_input_returns_same_body() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        let resp: reqwest::Response = client
            .request(method.clone(), format!("{}/api/games?limit=10&sort=title", base_url))
            .header("x-api-key", "whatever")
            .body(r#"{"title":"ignored"}"#)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::OK, "method {}", method);
        assert_eq!(resp.text().await.unwrap(), EXPECTED, "method {}", method);
    }
}
