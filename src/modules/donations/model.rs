use chrono::NaiveDate;
use sqlx::FromRow;

/// Sum of successful donations for one calendar bucket (day, week start or month start).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DonationBucket {
    pub period: NaiveDate,
    pub total_donation: i64,
}
