use axum::http::{HeaderName, HeaderValue, StatusCode};

use ourair_api::services::rate_limit::RATE_LIMITED_MESSAGE;

use crate::common::TestContext;

const FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

#[tokio::test]
async fn root_is_rate_limited_after_quota() {
    let ctx = TestContext::builder().rate_limit(3).build();

    for _ in 0..3 {
        ctx.server.get("/").await.assert_status(StatusCode::OK);
    }

    let response = ctx.server.get("/").await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], RATE_LIMITED_MESSAGE);
}

#[tokio::test]
async fn each_client_address_gets_its_own_quota() {
    let ctx = TestContext::builder().rate_limit(2).build();
    let noisy = HeaderValue::from_static("203.0.113.7");
    let quiet = HeaderValue::from_static("198.51.100.20");

    for _ in 0..2 {
        ctx.server
            .get("/")
            .add_header(FORWARDED_FOR, noisy.clone())
            .await
            .assert_status(StatusCode::OK);
    }
    ctx.server
        .get("/")
        .add_header(FORWARDED_FOR, noisy.clone())
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    ctx.server
        .get("/")
        .add_header(FORWARDED_FOR, quiet)
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn one_client_shares_its_quota_between_root_and_donations() {
    let ctx = TestContext::builder().rate_limit(2).build();
    let client = HeaderValue::from_static("203.0.113.7");

    ctx.server
        .get("/")
        .add_header(FORWARDED_FOR, client.clone())
        .await
        .assert_status(StatusCode::OK);
    ctx.server
        .get("/api/v1/donation")
        .add_header(FORWARDED_FOR, client.clone())
        .await
        .assert_status(StatusCode::OK);

    ctx.server
        .get("/api/v1/donation")
        .add_header(FORWARDED_FOR, client)
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn ticket_routes_are_not_rate_limited() {
    let ctx = TestContext::builder().rate_limit(1).build();

    ctx.server.get("/").await.assert_status(StatusCode::OK);
    ctx.server
        .get("/")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    for _ in 0..5 {
        ctx.server
            .get("/api/v1/tickets")
            .await
            .assert_status(StatusCode::OK);
    }
}
