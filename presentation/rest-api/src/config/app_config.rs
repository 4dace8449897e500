use super::{
    cart_config::CartConfig, cors_config, server_config::ServerConfig,
    store_api_config::StoreApiConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store_api: StoreApiConfig,
    pub cart: CartConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            store_api: StoreApiConfig::from_env(),
            cart: CartConfig::from_env(),
        }
    }
}
