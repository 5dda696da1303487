use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{
    dependency_injection::{DependencyContainer, build_repository},
    server::Server,
};

/// Product catalog service entry point
///
/// - config/: server, CORS, and storage settings read from the environment
/// - setup/: store selection, wiring, and the HTTP server
/// - api/: route handlers, DTOs, and error-to-status mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(storage = config.storage.backend.as_str(), "configuration loaded");

    // 4. Open the product store
    let repository = build_repository(&config.storage).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config.storage.backend, repository);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
