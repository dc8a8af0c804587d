use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Otp {
    pub id: i64,
    pub user_id: i64,
    pub otp_code: String,
    pub expired_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Otp {
    pub fn is_valid_for(&self, code: &str, now: DateTime<Utc>) -> bool {
        self.otp_code == code && self.expired_at >= now
    }
}
