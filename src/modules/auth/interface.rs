use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use super::model::User;
use crate::modules::common::ErrorResponse;

// =============================================================================
// REPOSITORY TRAITS
// =============================================================================

pub type Result<T> = std::result::Result<T, AuthError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Atomically consumes an unexpired OTP of `user_id` matching `code`.
    ///
    /// When one exists the user is marked verified and all of their OTPs are
    /// deleted in the same unit, and `true` is returned. Two callers racing on
    /// the same code see exactly one `true`.
    async fn consume_otp(&self, user_id: i64, code: &str, now: DateTime<Utc>) -> Result<bool>;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid or expired OTP")]
    InvalidOtp,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Shown to the end user as a soft failure, not a server fault
            Self::InvalidOtp => StatusCode::OK,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            tracing::error!(error = %e, "otp verification failed on storage");
        }
        let status = self.status_code();
        ErrorResponse::new(self.to_string()).into_response_with(status)
    }
}
