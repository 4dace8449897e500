use std::env;

/// Location of the remote store API serving stock and catalog lookups.
#[derive(Debug, Clone)]
pub struct StoreApiConfig {
    pub base_url: String,
}

impl StoreApiConfig {
    /// Environment variables:
    /// - STORE_API_URL: Base URL of the store API (default: "http://localhost:3333")
    pub fn from_env() -> Self {
        let base_url =
            env::var("STORE_API_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());
        Self { base_url }
    }
}
