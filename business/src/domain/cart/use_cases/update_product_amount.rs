use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ProductId};

/// Absolute quantity requested for a product already in the cart.
pub struct UpdateProductAmountParams {
    pub product_id: ProductId,
    pub amount: u32,
}

#[async_trait]
pub trait UpdateProductAmountUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError>;
}
