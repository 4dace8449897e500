use crate::domain::errors::{RepositoryError, ServiceError};

use super::model::ProductId;

/// Outcome of a failed cart operation.
///
/// `Service` and `Repository` are transport failures: the lookup or the write
/// did not complete, so the cart was left untouched.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.stock_exceeded")]
    StockExceeded,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("service.transport")]
    Service(#[from] ServiceError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, CartError::Service(_) | CartError::Repository(_))
    }
}

/// Violations of the cart invariants found while rebuilding a cart from raw data.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CartValidationError {
    #[error("cart.duplicated_product")]
    DuplicatedProduct(ProductId),
    #[error("cart.invalid_amount")]
    InvalidAmount(ProductId),
}

/// Reasons a stored cart could not be read back.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot.malformed")]
    Malformed,
    #[error("snapshot.unsupported_version")]
    UnsupportedVersion(u32),
    #[error("snapshot.invalid_cart")]
    InvalidCart(#[from] CartValidationError),
}
