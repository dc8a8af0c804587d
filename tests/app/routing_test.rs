use axum::http::StatusCode;

use crate::common::TestContext;

#[tokio::test]
async fn root_says_hello() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "hello world");
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/v1/flights").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], false);
    assert_eq!(
        body["message"],
        "are you lost? GET /api/v1/flights is not registered!"
    );
}
