use chrono::Utc;
use std::sync::Arc;

use super::interface::{FlightRepository, Result};
use super::seed::{empty_seat_map, random_flights, random_rating};

/// Populates the flight catalog with synthetic data.
///
/// Runs are not idempotent and not guarded against overlap. The first storage
/// error stops the run; rows written before it stay.
#[derive(Clone)]
pub struct FlightSeeder {
    flights: Arc<dyn FlightRepository>,
}

impl FlightSeeder {
    pub fn new(flights: Arc<dyn FlightRepository>) -> Self {
        Self { flights }
    }

    /// Creates `count` flights, each with a fresh 72-seat map. Returns the number created.
    pub async fn seed_flights(&self, count: usize) -> Result<usize> {
        let batch = random_flights(&mut rand::rng(), count, Utc::now());
        let seats = empty_seat_map();

        for flight in &batch {
            let stored = self.flights.create_flight(flight).await?;
            self.flights.upsert_seats(stored.id, &seats).await?;
        }

        tracing::info!(count = batch.len(), "seeded flights");
        Ok(batch.len())
    }

    /// Re-rolls every airport's rating independently. Returns the number of airports updated.
    pub async fn randomize_ratings(&self) -> Result<usize> {
        let ids = self.flights.airport_ids().await?;
        let ratings: Vec<(i64, f64)> = {
            let mut rng = rand::rng();
            ids.into_iter().map(|id| (id, random_rating(&mut rng))).collect()
        };

        for (airport_id, rating) in &ratings {
            self.flights.update_airport_rating(*airport_id, *rating).await?;
        }

        tracing::info!(count = ratings.len(), "airport ratings randomized");
        Ok(ratings.len())
    }

    pub async fn purge_flights(&self) -> Result<u64> {
        let deleted = self.flights.delete_all_flights().await?;
        tracing::info!(deleted, "flights purged");
        Ok(deleted)
    }
}
