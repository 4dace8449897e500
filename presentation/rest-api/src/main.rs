use dotenvy::dotenv;

mod api {
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod error;
    pub mod health {
        pub mod routes;
    }
    pub mod tags;
}
mod config {
    pub mod app_config;
    pub mod cart_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod server_config;
    pub mod store_api_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server
/// the storefront front end talks to.
///
/// - config/: Application configuration (server, CORS, database, store API, cart)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize the local cart database
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies (restores the persisted cart)
    let container = DependencyContainer::new(pool, &config).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
