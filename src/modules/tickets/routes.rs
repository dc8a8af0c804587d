use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn ticket_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(controller::list_tickets).post(controller::create_ticket))
        .route(
            "/{id}",
            get(controller::get_ticket)
                .put(controller::update_ticket)
                .delete(controller::delete_ticket),
        )
}
