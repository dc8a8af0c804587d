use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestContext;

#[tokio::test]
async fn health_reports_open_websocket_connections() {
    let ctx = TestContext::new();
    let (_id, _rx) = ctx.notifier.connect().await;

    let response = ctx.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["websocket_connections"], 1);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn metrics_endpoint_exports_prometheus_text() {
    let ctx = TestContext::new();
    ctx.server
        .post("/api/v1/tickets")
        .json(&json!({ "title": "Counted" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx.server.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    let text = response.text();
    assert!(text.contains("ourair_tickets_created_total 1"));
    assert!(text.contains("ourair_http_requests_total"));
    assert!(text.contains("endpoint=\"/api/v1/tickets\""));
}
