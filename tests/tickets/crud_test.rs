use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestContext;

async fn create_ticket(ctx: &TestContext, title: &str) -> i64 {
    let body: serde_json::Value = ctx
        .server
        .post("/api/v1/tickets")
        .json(&json!({ "title": title }))
        .await
        .json();

    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn list_tickets_starts_empty() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/v1/tickets").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_ticket_returns_stored_ticket() {
    let ctx = TestContext::new();
    let id = create_ticket(&ctx, "Meal preference").await;

    let response = ctx.server.get(&format!("/api/v1/tickets/{}", id)).await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Meal preference");
}

#[tokio::test]
async fn get_unknown_ticket_returns_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/v1/tickets/999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn get_ticket_with_non_positive_id_returns_not_found() {
    let ctx = TestContext::new();

    ctx.server
        .get("/api/v1/tickets/0")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_ticket_with_non_numeric_id_returns_bad_request() {
    let ctx = TestContext::new();

    ctx.server
        .get("/api/v1/tickets/abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_ticket_changes_only_given_fields() {
    let ctx = TestContext::new();
    let id = create_ticket(&ctx, "Wrong name on ticket").await;

    let response = ctx
        .server
        .put(&format!("/api/v1/tickets/{}", id))
        .json(&json!({ "status": "in_progress" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["title"], "Wrong name on ticket");
}

#[tokio::test]
async fn update_ticket_with_null_description_keeps_stored_description() {
    let ctx = TestContext::new();
    let body: serde_json::Value = ctx
        .server
        .post("/api/v1/tickets")
        .json(&json!({ "title": "Lost bag", "description": "Blue suitcase" }))
        .await
        .json();
    let id = body["id"].as_i64().unwrap();

    let response = ctx
        .server
        .put(&format!("/api/v1/tickets/{}", id))
        .json(&json!({ "description": null, "status": "resolved" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["description"], "Blue suitcase");
    assert_eq!(body["status"], "resolved");
}

#[tokio::test]
async fn update_ticket_with_empty_body_returns_bad_request() {
    let ctx = TestContext::new();
    let id = create_ticket(&ctx, "Upgrade request").await;

    ctx.server
        .put(&format!("/api/v1/tickets/{}", id))
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_ticket_with_unknown_status_returns_bad_request() {
    let ctx = TestContext::new();
    let id = create_ticket(&ctx, "Upgrade request").await;

    ctx.server
        .put(&format!("/api/v1/tickets/{}", id))
        .json(&json!({ "status": "escalated" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_unknown_ticket_returns_not_found() {
    let ctx = TestContext::new();

    ctx.server
        .put("/api/v1/tickets/999999")
        .json(&json!({ "title": "Ghost" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_ticket_removes_it() {
    let ctx = TestContext::new();
    let id = create_ticket(&ctx, "Duplicate booking").await;

    let response = ctx.server.delete(&format!("/api/v1/tickets/{}", id)).await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Ticket deleted");

    ctx.server
        .get(&format!("/api/v1/tickets/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    ctx.server
        .delete(&format!("/api/v1/tickets/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_tickets_when_storage_fails_returns_server_error() {
    let ctx = TestContext::builder().storage_down().build();

    let response = ctx.server.get("/api/v1/tickets").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], false);
}
