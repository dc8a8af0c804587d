use async_trait::async_trait;
use axum::http::StatusCode;

use super::model::{Flight, NewFlight, Seat};

pub type Result<T> = std::result::Result<T, SeedError>;

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn create_flight(&self, flight: &NewFlight) -> Result<Flight>;
    /// Replaces the seat map stored for `flight_id`, creating it when absent.
    async fn upsert_seats(&self, flight_id: i64, seats: &[Seat]) -> Result<()>;
    async fn airport_ids(&self) -> Result<Vec<i64>>;
    async fn update_airport_rating(&self, airport_id: i64, rating: f64) -> Result<()>;
    /// Removes every flight together with its seat map.
    async fn delete_all_flights(&self) -> Result<u64>;
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SeedError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
