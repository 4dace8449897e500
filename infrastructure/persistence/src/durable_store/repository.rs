use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::cart::repository::DurableStore;
use business::domain::errors::RepositoryError;

use super::entity::StoredValueEntity;

/// `DurableStore` backed by the `kv_store` table.
pub struct DurableStoreSqlite {
    pool: SqlitePool,
}

impl DurableStoreSqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DurableStore for DurableStoreSqlite {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RepositoryError> {
        let entity = sqlx::query_as::<_, StoredValueEntity>(
            "SELECT key, value FROM kv_store WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(%err, key, "failed to read stored value");
            RepositoryError::DatabaseError
        })?;

        Ok(entity.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(%err, key, "failed to write stored value");
            RepositoryError::Persistence
        })?;

        Ok(())
    }
}
