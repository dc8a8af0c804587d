pub mod auth;
pub mod common;
pub mod donations;
pub mod flights;
pub mod metrics;
pub mod tickets;
