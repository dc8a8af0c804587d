use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;

use super::{hub::NotificationHub, socket::handle_socket};

/// Router for the dedicated websocket listener.
pub fn websocket_routes(hub: Arc<NotificationHub>) -> Router {
    Router::new()
        .route("/", get(websocket_upgrade))
        .with_state(hub)
}

async fn websocket_upgrade(
    State(hub): State<Arc<NotificationHub>>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(hub, socket))
}
