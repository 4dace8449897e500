use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Key-value byte storage that survives restarts.
///
/// Values are always overwritten whole; there are no partial writes.
#[async_trait]
pub trait DurableStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RepositoryError>;
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), RepositoryError>;
}
