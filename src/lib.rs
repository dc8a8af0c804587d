pub mod config;
pub mod modules;
pub mod services;

use axum::{
    http::{HeaderValue, Method, StatusCode, Uri},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use config::DbPool;
use modules::auth::{auth_routes, crud::UserCrud, interface::UserRepository, service::OtpVerifier};
use modules::common::ErrorResponse;
use modules::donations::{crud::DonationCrud, donation_routes, interface::DonationRepository};
use modules::flights::{crud::FlightCrud, interface::FlightRepository, seed_routes, service::FlightSeeder};
use modules::metrics::metrics_routes;
use modules::tickets::{crud::TicketCrud, interface::TicketRepository, ticket_routes};
use services::metrics::{metrics_middleware, MetricsRegistry};
use services::notifier::NotificationHub;
use services::rate_limit::{create_rate_limiter, RateLimitLayer};

pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub tickets: Arc<dyn TicketRepository>,
    pub flights: Arc<dyn FlightRepository>,
    pub donations: Arc<dyn DonationRepository>,
    pub notifier: Arc<NotificationHub>,
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    /// State backed by MySQL repositories sharing one pool.
    pub fn from_pool(db: DbPool, notifier: Arc<NotificationHub>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            users: Arc::new(UserCrud::new(db.clone())),
            tickets: Arc::new(TicketCrud::new(db.clone())),
            flights: Arc::new(FlightCrud::new(db.clone())),
            donations: Arc::new(DonationCrud::new(db)),
            notifier,
            metrics,
        }
    }

    pub fn otp_verifier(&self) -> OtpVerifier {
        OtpVerifier::new(self.users.clone())
    }

    pub fn flight_seeder(&self) -> FlightSeeder {
        FlightSeeder::new(self.flights.clone())
    }
}

/// HTTP surface settings that do not belong to the application state.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    /// Per client address.
    pub rate_limit_per_minute: u32,
    /// Charge rate limits to the last `X-Forwarded-For` hop instead of the TCP peer.
    pub trust_proxy: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            rate_limit_per_minute: 20,
            trust_proxy: true,
        }
    }
}

pub fn create_app(state: AppState, options: &HttpOptions) -> Router {
    let state = Arc::new(state);
    let metrics = state.metrics.clone();

    let rate_limiter = create_rate_limiter(options.rate_limit_per_minute);
    let limited = Router::new()
        .route("/", get(root))
        .nest("/api/v1", donation_routes())
        .layer(RateLimitLayer::new(rate_limiter, options.trust_proxy));

    Router::new()
        .merge(limited)
        .merge(metrics_routes())
        .nest("/api/v1/auth", auth_routes())
        .nest("/api/v1/tickets", ticket_routes())
        .nest("/api/v1/seed", seed_routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(metrics, metrics_middleware))
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
        .allow_credentials(true)
}

#[derive(Serialize)]
struct RootResponse {
    status: bool,
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: true,
        message: "hello world",
    })
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!(
            "are you lost? {} {} is not registered!",
            method, target
        ))),
    )
}
