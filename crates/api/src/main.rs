//! Messari relay API server binary entrypoint.

use std::time::Duration;

use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use messari_common::config::AppConfig;

use messari_api::routes::create_router;
use messari_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up RUST_LOG / LOG_FORMAT from .env before the subscriber reads them
    dotenvy::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "messari_api=debug,messari_engine=debug,messari_client=debug,tower_http=debug",
        )
    });
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!("Starting Messari relay API server...");

    // Load configuration
    let config = AppConfig::from_env()?;
    let addr = config.api_listen_addr;
    let request_timeout = Duration::from_secs(config.request_timeout_secs);

    // Build application state
    let state = AppState::from_config(config)?;
    tracing::info!(
        upstream = %state.config.messari_base_url,
        page_size = state.aggregation.page_size,
        min_market_cap_usd = state.aggregation.min_market_cap_usd,
        "Messari client ready"
    );

    // Build router
    let app = create_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Messari relay API server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, keep serving until the process is killed
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal, stopping gracefully...");
}
