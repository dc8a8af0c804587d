use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::AppState;
use super::schema::{PurgeFlightsResponse, SeedFlightsResponse, StatusResponse};
use super::seed::FLIGHTS_PER_RUN;

// =============================================================================
// POST /api/v1/seed/flights
// =============================================================================

pub async fn seed_flights(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SeedFlightsResponse>) {
    match state.flight_seeder().seed_flights(FLIGHTS_PER_RUN).await {
        Ok(count) => {
            state.metrics.flights_seeded_total.inc_by(count as u64);
            (StatusCode::OK, Json(SeedFlightsResponse::created(count)))
        }
        Err(e) => {
            tracing::error!(error = %e, "flight seeding aborted");
            (e.status_code(), Json(SeedFlightsResponse::failed(e.to_string())))
        }
    }
}

// =============================================================================
// POST /api/v1/seed/ratings
// =============================================================================

pub async fn update_ratings(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<StatusResponse>) {
    match state.flight_seeder().randomize_ratings().await {
        Ok(_) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: true,
                message: "success".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "updating airport ratings failed");
            (
                e.status_code(),
                Json(StatusResponse {
                    status: false,
                    message: e.to_string(),
                }),
            )
        }
    }
}

// =============================================================================
// DELETE /api/v1/seed/flights
// =============================================================================

pub async fn purge_flights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PurgeFlightsResponse>, (StatusCode, Json<StatusResponse>)> {
    let deleted = state.flight_seeder().purge_flights().await.map_err(|e| {
        (
            e.status_code(),
            Json(StatusResponse {
                status: false,
                message: e.to_string(),
            }),
        )
    })?;

    Ok(Json(PurgeFlightsResponse {
        status: true,
        deleted,
    }))
}
