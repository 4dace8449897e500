use std::env;

use business::domain::cart::store::DEFAULT_CART_KEY;

/// Cart persistence settings.
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub storage_key: String,
}

impl CartConfig {
    /// Environment variables:
    /// - CART_STORAGE_KEY: Key holding the serialized cart (default: "@storefront:cart")
    pub fn from_env() -> Self {
        let storage_key = env::var("CART_STORAGE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CART_KEY.to_string());
        Self { storage_key }
    }
}
