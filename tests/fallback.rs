mod common;

use common::spawn_app;
use reqwest::StatusCode;
use serde_json::Value;

#[test_log::test(tokio::test)]
async fn unknown_route_returns_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/v1/non-existing-route"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Route not found");
}

#[test_log::test(tokio::test)]
async fn unknown_route_with_post_returns_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/api/v2/ping"))
        .json(&serde_json::json!({"data": "x"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Route not found");
}

#[test_log::test(tokio::test)]
async fn unsupported_method_on_ping_returns_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{address}/api/v1/ping"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Route not found");
}
