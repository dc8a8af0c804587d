use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn donation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/donation", get(controller::get_donation_stats))
}
