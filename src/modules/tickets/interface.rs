use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::model::{NewTicket, Ticket, TicketChanges};
use crate::modules::common::ErrorResponse;

pub type Result<T> = std::result::Result<T, TicketError>;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Ticket>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Ticket>>;
    async fn create(&self, ticket: &NewTicket) -> Result<Ticket>;
    /// `Ok(None)` when no ticket has this id.
    async fn update(&self, id: i64, changes: &TicketChanges) -> Result<Option<Ticket>>;
    /// `Ok(false)` when no ticket has this id.
    async fn delete(&self, id: i64) -> Result<bool>;
}

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("Ticket {0} not found")]
    NotFound(i64),

    #[error("At least one field must be provided")]
    EmptyUpdate,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TicketError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyUpdate => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TicketError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            tracing::error!(error = %e, "ticket storage failure");
        }
        let status = self.status_code();
        ErrorResponse::new(self.to_string()).into_response_with(status)
    }
}
