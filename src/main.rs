//! Album Catalog API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use album_catalog::infrastructure::driven_adapters::album_repository::PostgresAlbumRepository;
use album_catalog::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use album_catalog::infrastructure::driven_adapters::database;
use album_catalog::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Install the global subscriber in the configured output format
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "album_catalog=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    // Open the shared pool and make sure the database answers; either failure is fatal
    let pool = database::create_pool(&config.database).await?;
    database::ping(&pool).await?;
    tracing::info!("Database connection pool created");

    // Create repository and application state
    let album_repository = Arc::new(PostgresAlbumRepository::new(pool));
    let app_state = AppState::new(album_repository, config.id_generator.max_attempts);

    // Build router
    let app = api_rest::router(app_state);

    // Start server
    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
