use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// VERIFY OTP
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 16, message = "OTP must be between 1 and 16 characters"))]
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub status: bool,
    pub message: &'static str,
    pub data: Option<()>,
}

impl VerifyOtpResponse {
    pub fn verified() -> Self {
        Self {
            status: true,
            message: "Email verified successfully",
            data: None,
        }
    }
}
