pub mod hub;
pub mod routes;
pub mod socket;

pub use hub::{NotificationEnvelope, NotificationHub};
pub use routes::websocket_routes;
