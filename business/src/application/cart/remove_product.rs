use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::logger::Logger;

pub struct RemoveProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Removing product from cart: {}", product_id));

        let mut cart = self.store.lock().await;
        if !cart.contains(product_id) {
            self.logger
                .warn(&format!("Product {} is not in the cart", product_id));
            return Err(CartError::ProductNotFound);
        }

        let next = cart.without(product_id);
        self.store.commit(&mut cart, next.clone()).await?;

        self.logger
            .info(&format!("Product {} removed from cart", product_id));
        Ok(next)
    }
}
