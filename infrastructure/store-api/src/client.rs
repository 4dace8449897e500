use reqwest::Client;

use business::domain::cart::model::ProductId;

/// Shared HTTP client for the store API (stock and catalog endpoints).
#[derive(Clone)]
pub struct StoreApiClient {
    pub client: Client,
    pub base_url: String,
}

impl StoreApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the stock endpoint URL for a product.
    pub fn stock_url(&self, product_id: ProductId) -> String {
        format!("{}/stock/{}", self.base_url, product_id)
    }

    /// Returns the catalog endpoint URL for a product.
    pub fn product_url(&self, product_id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls() {
        let client = StoreApiClient::new("http://localhost:3333");

        assert_eq!(
            client.stock_url(ProductId::new(4)),
            "http://localhost:3333/stock/4"
        );
        assert_eq!(
            client.product_url(ProductId::new(4)),
            "http://localhost:3333/products/4"
        );
    }

    #[test]
    fn should_ignore_trailing_slash_in_base_url() {
        let client = StoreApiClient::new("http://localhost:3333/api/");

        assert_eq!(
            client.stock_url(ProductId::new(1)),
            "http://localhost:3333/api/stock/1"
        );
    }
}
