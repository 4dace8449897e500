use async_trait::async_trait;

use crate::domain::errors::ServiceError;

use super::model::{ProductId, ProductMetadata, StockInfo};

/// Service port for the remote stock availability lookup.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo, ServiceError>;
}

/// Service port for product display metadata.
///
/// `Ok(None)` means the catalog answered but had nothing for this id,
/// which is distinct from a transport failure.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductMetadata>, ServiceError>;
}
