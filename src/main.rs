use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_consig_api::api;
use rust_consig_api::config::Config;
use rust_consig_api::handlers::AppState;

/// Main entry point for the application.
///
/// Initializes logging and configuration, builds the router with its
/// middleware (CORS, tracing, body limit, rate limiting) and starts the
/// Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_consig_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let port = config.port;

    // Configure rate limiter per client IP
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );
    tracing::info!(
        "Rate limiter configured: {}/s per IP, burst {}",
        config.rate_limit_per_second,
        config.rate_limit_burst
    );

    let state = Arc::new(AppState::new(config));

    // Health check bypasses rate limiting
    let protected_routes = api::routes(&state).layer(GovernorLayer {
        config: governor_conf,
    });
    let app = api::app(state, protected_routes);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
