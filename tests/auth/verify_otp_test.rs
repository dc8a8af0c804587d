use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use ourair_api::modules::auth::{interface::AuthError, service::OtpVerifier};

use crate::common::{test_email, TestContext};

fn assert_invalid_otp(body: &serde_json::Value) {
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Invalid or expired OTP");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn verify_otp_with_valid_code_marks_user_verified() {
    let ctx = TestContext::new();
    let email = test_email();
    let user_id = ctx.users.add_user(&email);
    ctx.users
        .add_otp(user_id, "247824", Utc::now() + Duration::minutes(5));

    let response = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&json!({ "email": &email, "otp": "247824" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "Email verified successfully");
    assert!(body["data"].is_null());

    assert!(ctx.users.is_verified(user_id));
    assert_eq!(ctx.users.otp_count(user_id), 0);
}

#[tokio::test]
async fn verify_otp_cannot_be_replayed() {
    let ctx = TestContext::new();
    let email = test_email();
    let user_id = ctx.users.add_user(&email);
    ctx.users
        .add_otp(user_id, "111222", Utc::now() + Duration::minutes(5));

    let payload = json!({ "email": &email, "otp": "111222" });

    ctx.server
        .post("/api/v1/auth/verify-otp")
        .json(&payload)
        .await
        .assert_status(StatusCode::OK);

    let replay = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&payload)
        .await;

    replay.assert_status(StatusCode::OK);
    assert_invalid_otp(&replay.json());
}

#[tokio::test]
async fn concurrent_verifications_of_one_code_succeed_once() {
    let ctx = TestContext::new();
    let email = test_email();
    let user_id = ctx.users.add_user(&email);
    ctx.users
        .add_otp(user_id, "111222", Utc::now() + Duration::minutes(5));

    let verifier = OtpVerifier::new(ctx.users.clone());
    let (first, second) = tokio::join!(
        verifier.verify(&email, "111222"),
        verifier.verify(&email, "111222"),
    );

    let succeeded = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(succeeded, 1, "first={:?} second={:?}", first, second);
    assert!([first, second]
        .into_iter()
        .any(|r| matches!(r, Err(AuthError::InvalidOtp))));
    assert!(ctx.users.is_verified(user_id));
    assert_eq!(ctx.users.otp_count(user_id), 0);
}

#[tokio::test]
async fn verify_otp_with_wrong_code_is_rejected() {
    let ctx = TestContext::new();
    let email = test_email();
    let user_id = ctx.users.add_user(&email);
    ctx.users
        .add_otp(user_id, "247824", Utc::now() + Duration::minutes(5));

    let response = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&json!({ "email": &email, "otp": "000000" }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_invalid_otp(&response.json());
    assert!(!ctx.users.is_verified(user_id));
    assert_eq!(ctx.users.otp_count(user_id), 1);
}

#[tokio::test]
async fn verify_otp_with_expired_code_is_rejected() {
    let ctx = TestContext::new();
    let email = test_email();
    let user_id = ctx.users.add_user(&email);
    ctx.users
        .add_otp(user_id, "247824", Utc::now() - Duration::minutes(1));

    let response = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&json!({ "email": &email, "otp": "247824" }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_invalid_otp(&response.json());
    assert!(!ctx.users.is_verified(user_id));
}

#[tokio::test]
async fn verify_otp_for_unknown_email_looks_like_wrong_code() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&json!({ "email": test_email(), "otp": "247824" }))
        .await;

    response.assert_status(StatusCode::OK);
    assert_invalid_otp(&response.json());
}

#[tokio::test]
async fn verify_otp_with_malformed_email_returns_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&json!({ "email": "not-an-email", "otp": "247824" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], false);
}

#[tokio::test]
async fn verify_otp_with_missing_otp_returns_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&json!({ "email": test_email() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn verify_otp_when_storage_fails_returns_server_error() {
    let ctx = TestContext::builder().storage_down().build();

    let response = ctx
        .server
        .post("/api/v1/auth/verify-otp")
        .json(&json!({ "email": test_email(), "otp": "247824" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], false);
}
