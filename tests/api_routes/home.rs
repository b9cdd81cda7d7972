//! tests/api_routes/home.rs
//! The homepage renders the checklist inside the root layout.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn renders_homepage() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type: String = resp.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);

    let html: String = resp.text().await.unwrap();
    assert!(html.contains("<title>Content Site Challenge</title>"));
    assert!(html.contains(r#"<meta name="description" content="A mini content site challenge built with Axum." />"#));
    assert!(html.contains("Welcome 👋"));
    assert!(html.contains("Performance tweaks"));
    assert!(html.contains("Monitoring stubs"));
}
