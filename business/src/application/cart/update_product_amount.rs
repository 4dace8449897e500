use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::services::StockService;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateProductAmountUseCaseImpl {
    pub store: Arc<CartStore>,
    pub stock_service: Arc<dyn StockService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        let UpdateProductAmountParams { product_id, amount } = params;
        self.logger.info(&format!(
            "Changing amount of product {} to {}",
            product_id, amount
        ));

        let mut cart = self.store.lock().await;
        if !cart.contains(product_id) {
            self.logger
                .warn(&format!("Product {} is not in the cart", product_id));
            return Err(CartError::ProductNotFound);
        }

        let stock = self.stock_service.get_stock(product_id).await?;

        // Zero is rejected like an over-stock request; removal has its own operation.
        if amount == 0 || amount > stock.amount {
            self.logger.warn(&format!(
                "Cannot set product {} to {}: {} in stock",
                product_id, amount, stock.amount
            ));
            return Err(CartError::StockExceeded);
        }

        let next = cart.with_amount(product_id, amount);
        self.store.commit(&mut cart, next.clone()).await?;

        self.logger
            .info(&format!("Product {} amount set to {}", product_id, amount));
        Ok(next)
    }
}
