#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, unreachable_pub)]
use reqwest::StatusCode;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/register", app.server_url))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let app = common::TestApp::spawn().await;

    let resp = app
        .client
        .post(format!("{}/messages", app.server_url))
        .json(&serde_json::json!({ "messageText": "hi", "postedBy": "one" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = common::TestApp::spawn().await;

    assert_eq!(app.get("/messages/abc").await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/accounts/abc/messages").await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let app = common::TestApp::spawn().await;

    let resp = app.get("/messages").await;
    assert!(resp.headers().get("x-request-id").is_some());

    let resp =
        app.client.get(format!("{}/messages", app.server_url)).header("x-request-id", "abc-123").send().await.unwrap();
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "abc-123");
}
