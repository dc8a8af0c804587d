use async_trait::async_trait;
use sqlx::{types::Json, MySql, Pool};

use super::interface::{FlightRepository, Result};
use super::model::{Flight, NewFlight, Seat};

pub struct FlightCrud {
    pool: Pool<MySql>,
}

impl FlightCrud {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRepository for FlightCrud {
    async fn create_flight(&self, flight: &NewFlight) -> Result<Flight> {
        let result = sqlx::query(
            r#"
            INSERT INTO flights
                (airplane_id, from_id, to_id, departure_time, arrival_time, flight_type, class, ticket_price)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(flight.airplane_id)
        .bind(flight.from_id)
        .bind(flight.to_id)
        .bind(flight.departure_time)
        .bind(flight.arrival_time)
        .bind(flight.flight_type.as_str())
        .bind(flight.class.as_str())
        .bind(flight.ticket_price)
        .execute(&self.pool)
        .await?;

        Ok(Flight {
            id: result.last_insert_id() as i64,
            airplane_id: flight.airplane_id,
            from_id: flight.from_id,
            to_id: flight.to_id,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            flight_type: flight.flight_type.as_str().to_string(),
            class: flight.class.as_str().to_string(),
            ticket_price: flight.ticket_price,
        })
    }

    async fn upsert_seats(&self, flight_id: i64, seats: &[Seat]) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO flight_seats (flight_id, seats)
            VALUES (?, ?)
            ON DUPLICATE KEY UPDATE seats = VALUES(seats)
            "#,
        )
        .bind(flight_id)
        .bind(Json(seats))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn airport_ids(&self) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM airports ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    async fn update_airport_rating(&self, airport_id: i64, rating: f64) -> Result<()> {
        sqlx::query("UPDATE airports SET rating = ? WHERE id = ?")
            .bind(rating)
            .bind(airport_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_all_flights(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM flight_seats")
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM flights")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
