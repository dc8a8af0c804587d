use chrono::Utc;
use std::sync::Arc;

use super::interface::{AuthError, Result, UserRepository};

/// Checks a submitted one-time passcode against the user's stored codes.
#[derive(Clone)]
pub struct OtpVerifier {
    users: Arc<dyn UserRepository>,
}

impl OtpVerifier {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Unknown email, wrong code and expired code all fail the same way.
    /// On success the user's codes are consumed, so a code verifies at most once.
    pub async fn verify(&self, email: &str, code: &str) -> Result<()> {
        let now = Utc::now();

        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AuthError::InvalidOtp);
        };

        if !self.users.consume_otp(user.id, code, now).await? {
            tracing::debug!(user_id = user.id, "no matching unexpired otp");
            return Err(AuthError::InvalidOtp);
        }

        tracing::info!(user_id = user.id, "user verified by otp");
        Ok(())
    }
}
