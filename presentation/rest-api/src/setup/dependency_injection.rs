use std::sync::Arc;

use logger::TracingLogger;
use persistence::durable_store::repository::DurableStoreSqlite;
use store_api::catalog_service::CatalogServiceHttp;
use store_api::client::StoreApiClient;
use store_api::stock_service::StockServiceHttp;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::update_product_amount::UpdateProductAmountUseCaseImpl;
use business::domain::cart::store::CartStore;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::SqlitePool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger::new("cart"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let durable_store = Arc::new(DurableStoreSqlite::new(pool));
        let store_api_client = StoreApiClient::new(config.store_api.base_url.clone());
        let stock_service = Arc::new(StockServiceHttp::new(store_api_client.clone()));
        let catalog_service = Arc::new(CatalogServiceHttp::new(store_api_client));

        // Cart state, restored once and shared by every use case
        let cart_store = Arc::new(
            CartStore::load(
                durable_store,
                config.cart.storage_key.clone(),
                Arc::new(TracingLogger::new("cart_store")),
            )
            .await?,
        );

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            store: cart_store.clone(),
            stock_service: stock_service.clone(),
            catalog_service,
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let update_product_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            store: cart_store,
            stock_service,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_product_amount_use_case,
        );

        Ok(Self {
            health_api,
            cart_api,
        })
    }
}
