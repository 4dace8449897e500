use async_trait::async_trait;
use serde::Deserialize;

use business::domain::cart::model::{ProductId, StockInfo};
use business::domain::cart::services::StockService;
use business::domain::errors::ServiceError;

use crate::client::StoreApiClient;

#[derive(Deserialize)]
struct StockResponse {
    amount: u32,
}

pub struct StockServiceHttp {
    client: StoreApiClient,
}

impl StockServiceHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    fn parse_stock(body: &[u8]) -> Result<StockInfo, ServiceError> {
        let parsed: StockResponse =
            serde_json::from_slice(body).map_err(|_| ServiceError::InvalidResponse)?;

        Ok(StockInfo {
            amount: parsed.amount,
        })
    }
}

#[async_trait]
impl StockService for StockServiceHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo, ServiceError> {
        let response = self
            .client
            .client
            .get(self.client.stock_url(product_id))
            .send()
            .await
            .map_err(|_| ServiceError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|_| ServiceError::Unavailable)?;

        Self::parse_stock(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_stock_amount() {
        let stock = StockServiceHttp::parse_stock(br#"{"id":1,"amount":3}"#).unwrap();

        assert_eq!(stock.amount, 3);
    }

    #[test]
    fn should_reject_negative_amount() {
        let result = StockServiceHttp::parse_stock(br#"{"id":1,"amount":-2}"#);

        assert!(matches!(result, Err(ServiceError::InvalidResponse)));
    }

    #[test]
    fn should_reject_body_without_amount() {
        let result = StockServiceHttp::parse_stock(br#"{"id":1}"#);

        assert!(matches!(result, Err(ServiceError::InvalidResponse)));
    }
}
