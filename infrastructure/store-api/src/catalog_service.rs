use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};

use business::domain::cart::model::{ProductDetails, ProductId, ProductMetadata};
use business::domain::cart::services::CatalogService;
use business::domain::errors::ServiceError;

use crate::client::StoreApiClient;

/// Catalog payload. Older catalogs name the display field `title`.
#[derive(Deserialize)]
struct CatalogProduct {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    image: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

pub struct CatalogServiceHttp {
    client: StoreApiClient,
}

impl CatalogServiceHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    /// `null` and `{}` count as "no product", like a 404.
    fn parse_product(
        product_id: ProductId,
        body: Value,
    ) -> Result<Option<ProductMetadata>, ServiceError> {
        match &body {
            Value::Null => return Ok(None),
            Value::Object(fields) if fields.is_empty() => return Ok(None),
            Value::Object(_) => {}
            _ => return Err(ServiceError::InvalidResponse),
        }

        let mut product: CatalogProduct =
            serde_json::from_value(body).map_err(|_| ServiceError::InvalidResponse)?;
        // `title` is kept verbatim alongside the `name` derived from it.
        if let Some(title) = &product.title {
            product
                .extra
                .insert("title".to_string(), Value::from(title.as_str()));
        }

        let details = ProductDetails {
            name: product.name.or(product.title).unwrap_or_default(),
            price: product.price,
            image: product.image,
            extra: product.extra,
        };

        Ok(Some(ProductMetadata {
            id: product_id,
            details: details.without_reserved_keys(),
        }))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceHttp {
    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductMetadata>, ServiceError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(product_id))
            .send()
            .await
            .map_err(|_| ServiceError::Unavailable)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|_| ServiceError::Unavailable)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value =
            serde_json::from_slice(&body).map_err(|_| ServiceError::InvalidResponse)?;
        Self::parse_product(product_id, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::{Cart, Product};
    use business::domain::cart::snapshot;
    use serde_json::json;

    #[test]
    fn should_parse_catalog_product() {
        let body = json!({
            "id": 2,
            "name": "Shoe",
            "price": 179.9,
            "image": "https://cdn.example.com/shoe.jpg",
            "brand": "Acme"
        });

        let metadata = CatalogServiceHttp::parse_product(ProductId::new(2), body)
            .unwrap()
            .unwrap();

        assert_eq!(metadata.id, ProductId::new(2));
        assert_eq!(metadata.details.name, "Shoe");
        assert_eq!(metadata.details.price, Some(179.9));
        assert_eq!(
            metadata.details.image.as_deref(),
            Some("https://cdn.example.com/shoe.jpg")
        );
        assert_eq!(metadata.details.extra.get("brand"), Some(&json!("Acme")));
        assert!(metadata.details.extra.get("id").is_none());
    }

    #[test]
    fn should_accept_title_as_name() {
        let body = json!({ "id": 1, "title": "Tênis de Caminhada", "price": 139.9 });

        let metadata = CatalogServiceHttp::parse_product(ProductId::new(1), body)
            .unwrap()
            .unwrap();

        assert_eq!(metadata.details.name, "Tênis de Caminhada");
    }

    #[test]
    fn should_keep_title_verbatim() {
        let body = json!({ "id": 1, "title": "Sneaker" });

        let metadata = CatalogServiceHttp::parse_product(ProductId::new(1), body)
            .unwrap()
            .unwrap();

        assert_eq!(metadata.details.name, "Sneaker");
        assert_eq!(metadata.details.extra.get("title"), Some(&json!("Sneaker")));
    }

    #[test]
    fn should_store_catalog_product_with_amount_field_readably() {
        let body = json!({ "id": 2, "title": "Shoe", "price": 10.0, "amount": 7 });
        let metadata = CatalogServiceHttp::parse_product(ProductId::new(2), body)
            .unwrap()
            .unwrap();
        assert!(metadata.details.extra.get("amount").is_none());

        let cart = Cart::empty().with_product(Product::from_metadata(metadata));
        let decoded = snapshot::decode(&snapshot::encode(&cart).unwrap()).unwrap();

        assert_eq!(decoded, cart);
        assert_eq!(decoded.find(ProductId::new(2)).unwrap().amount, 1);
    }

    #[test]
    fn should_treat_null_and_empty_object_as_missing() {
        assert!(
            CatalogServiceHttp::parse_product(ProductId::new(1), Value::Null)
                .unwrap()
                .is_none()
        );
        assert!(
            CatalogServiceHttp::parse_product(ProductId::new(1), json!({}))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn should_reject_non_object_body() {
        let result = CatalogServiceHttp::parse_product(ProductId::new(1), json!([1, 2]));

        assert!(matches!(result, Err(ServiceError::InvalidResponse)));
    }

    #[test]
    fn should_reject_mistyped_price() {
        let result =
            CatalogServiceHttp::parse_product(ProductId::new(1), json!({ "price": "cheap" }));

        assert!(matches!(result, Err(ServiceError::InvalidResponse)));
    }
}
