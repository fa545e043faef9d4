// Site Server Binary Entry Point
//
// Purpose: Serve the bilingual site from the hosted backend or a JSON fixture
// Usage: cargo run --features api --bin site_server

use azhar_site::{create_router, AppState, ContentSource, SiteConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "azhar_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = SiteConfig::from_env()?;

    tracing::info!("Configuration:");
    match &config.source {
        ContentSource::Fixture(path) => tracing::info!("  CONTENT_FIXTURE: {}", path.display()),
        ContentSource::Hosted { url, .. } => tracing::info!("  SUPABASE_URL: {}", url),
    }
    tracing::info!("  DEFAULT_LANGUAGE: {}", config.default_language);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  REQUEST_TIMEOUT_SECS: {}", config.request_timeout.as_secs());

    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
