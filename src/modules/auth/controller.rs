use axum::{extract::State, Json};
use std::sync::Arc;

use crate::modules::auth::{interface::AuthError, schema::{VerifyOtpRequest, VerifyOtpResponse}};
use crate::modules::common::ValidatedJson;
use crate::AppState;

// =============================================================================
// POST /api/v1/auth/verify-otp
// =============================================================================

pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, AuthError> {
    let outcome = state.otp_verifier().verify(&req.email, &req.otp).await;

    let label = match &outcome {
        Ok(()) => "verified",
        Err(AuthError::InvalidOtp) => "rejected",
        Err(AuthError::Database(_)) => "error",
    };
    state
        .metrics
        .otp_verifications_total
        .with_label_values(&[label])
        .inc();

    outcome.map(|()| Json(VerifyOtpResponse::verified()))
}
