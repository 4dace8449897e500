use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, Product};
use crate::domain::cart::services::{CatalogService, StockService};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::logger::Logger;

pub struct AddProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub stock_service: Arc<dyn StockService>,
    pub catalog_service: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Adding product to cart: {}", product_id));

        let mut cart = self.store.lock().await;
        let current_amount = cart.find(product_id).map(|product| product.amount);

        // Stock is fetched even for products that are not in the cart yet.
        let stock = self.stock_service.get_stock(product_id).await?;

        let next = match current_amount {
            Some(amount) => {
                let desired = amount
                    .checked_add(1)
                    .filter(|desired| *desired <= stock.amount)
                    .ok_or_else(|| {
                        self.logger.warn(&format!(
                            "Cannot add product {}: {} requested, {} in stock",
                            product_id,
                            u64::from(amount) + 1,
                            stock.amount
                        ));
                        CartError::StockExceeded
                    })?;
                cart.with_amount(product_id, desired)
            }
            None => {
                let metadata = self
                    .catalog_service
                    .get_product(product_id)
                    .await?
                    .ok_or_else(|| {
                        self.logger
                            .warn(&format!("Product {} not found in catalog", product_id));
                        CartError::ProductNotFound
                    })?;
                cart.with_product(Product::from_metadata(metadata))
            }
        };

        self.store.commit(&mut cart, next.clone()).await?;

        self.logger
            .info(&format!("Product {} added to cart", product_id));
        Ok(next)
    }
}
