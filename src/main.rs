//! Malaf Server — student file organizer with Google Drive mirroring.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use malaf_core::config::AppConfig;
use malaf_core::error::AppError;
use malaf_core::traits::drive::DriveApi;
use malaf_drive::client::HttpDriveClient;

#[tokio::main]
async fn main() {
    let env = std::env::var("MALAF_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Malaf v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = malaf_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    malaf_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    let drive: Arc<dyn DriveApi> = Arc::new(HttpDriveClient::new(config.drive.clone())?);

    let state = malaf_api::build_state(config, db_pool, drive);
    malaf_api::run_server(state).await
}
