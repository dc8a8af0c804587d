use axum::{routing::post, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn seed_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/flights",
            post(controller::seed_flights).delete(controller::purge_flights),
        )
        .route("/ratings", post(controller::update_ratings))
}
