use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::model::DonationBucket;
use crate::modules::common::ErrorResponse;

pub type Result<T> = std::result::Result<T, DonationError>;

/// Aggregates over transactions with `status = true`, ordered by period.
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// One bucket per day over the last 7 days.
    async fn daily_totals(&self) -> Result<Vec<DonationBucket>>;
    /// One bucket per Monday-start week over the last 30 days.
    async fn weekly_totals(&self) -> Result<Vec<DonationBucket>>;
    /// The bucket for the current calendar month.
    async fn monthly_totals(&self) -> Result<Vec<DonationBucket>>;
}

#[derive(Debug, thiserror::Error)]
pub enum DonationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DonationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DonationError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "donation statistics failed");
        let status = self.status_code();
        ErrorResponse::new(self.to_string()).into_response_with(status)
    }
}
