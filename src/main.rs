use std::net::SocketAddr;
use std::sync::Arc;

use ourair_api::config::{init_db, Config};
use ourair_api::services::{
    metrics::MetricsRegistry,
    notifier::{websocket_routes, NotificationHub},
    scheduler::run_daily_seeding,
};
use ourair_api::{create_app, AppState, HttpOptions};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ourair_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");

    let db = init_db(&config.database_url)
        .await
        .expect("Failed to connect to MySQL");
    tracing::info!("Connected to MySQL");

    let metrics = MetricsRegistry::new().expect("Failed to create metrics registry");
    let notifier = Arc::new(NotificationHub::new());

    let state = AppState::from_pool(db, notifier.clone(), metrics);

    if config.seed_schedule_enabled {
        tokio::spawn(run_daily_seeding(state.flight_seeder()));
    }

    let app = create_app(
        state,
        &HttpOptions {
            cors_origins: config.cors_origins.clone(),
            rate_limit_per_minute: config.rate_limit_per_minute,
            trust_proxy: config.trust_proxy,
        },
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let ws_addr = SocketAddr::from(([0, 0, 0, 0], config.ws_port));
    let ws_listener = tokio::net::TcpListener::bind(ws_addr)
        .await
        .expect("Failed to bind websocket port");
    tracing::info!("WebSocket server running on ws://localhost:{}", config.ws_port);
    let ws_app = websocket_routes(notifier.clone());
    let ws_server = tokio::spawn(async move {
        axum::serve(ws_listener, ws_app)
            .with_graceful_shutdown(wait_for(shutdown_rx))
            .await
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind HTTP port");
    tracing::info!("Server running on http://localhost:{}", config.port);

    // Peer addresses key the rate limiter when no trusted proxy header is present
    let http_server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    if let Err(e) = http_server.await {
        tracing::error!(error = %e, "HTTP server error");
    }

    // Open sockets only finish once their senders are gone
    notifier.close_all().await;
    match ws_server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!(error = %e, "WebSocket server error"),
        Err(e) => tracing::error!(error = %e, "WebSocket server task failed"),
    }

    tracing::info!("Server stopped");
}

async fn wait_for(mut shutdown_rx: watch::Receiver<bool>) {
    let _ = shutdown_rx.wait_for(|stopped| *stopped).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
