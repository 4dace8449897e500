use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

/// Initialize the local cart database from environment variables
///
/// Environment variables:
/// - CART_DATABASE_URL: SQLite connection string (default: "sqlite://cart.db")
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url = env::var("CART_DATABASE_URL").unwrap_or_else(|_| "sqlite://cart.db".to_string());
    let pool = create_sqlite_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool).await?;
    tracing::info!("Cart database ready");
    Ok(pool)
}
