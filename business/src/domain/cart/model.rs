use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::CartValidationError;

pub use crate::domain::shared::value_objects::ProductId;

/// Keys written by `Product` and `ProductDetails` themselves. A copy of any of
/// them in `extra` would be serialized twice.
pub const RESERVED_KEYS: [&str; 5] = ["id", "amount", "name", "price", "image"];

/// Descriptive product fields as returned by the catalog.
///
/// Copied verbatim on first insertion and never re-fetched. Fields the cart
/// does not know about are kept in `extra` so they survive persistence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductDetails {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Drops `extra` entries that collide with the typed fields.
    pub fn without_reserved_keys(mut self) -> Self {
        for key in RESERVED_KEYS {
            self.extra.remove(key);
        }
        self
    }
}

/// Catalog lookup result for a single product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMetadata {
    pub id: ProductId,
    pub details: ProductDetails,
}

/// A cart line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub amount: u32,
    #[serde(flatten)]
    pub details: ProductDetails,
}

impl Product {
    /// First insertion of a catalog product: always one unit.
    pub fn from_metadata(metadata: ProductMetadata) -> Self {
        Self {
            id: metadata.id,
            amount: 1,
            details: metadata.details.without_reserved_keys(),
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.details.price.unwrap_or(0.0) * f64::from(self.amount)
    }
}

/// Current stock of a product, fetched fresh for every validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub amount: u32,
}

/// Ordered list of products, unique by id, every amount at least 1.
///
/// Mutations never happen in place: each operation builds the next cart so
/// that it can be persisted before it becomes visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from raw products, checking uniqueness and amounts.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CartValidationError> {
        let mut seen = std::collections::HashSet::with_capacity(products.len());
        for product in &products {
            if product.amount == 0 {
                return Err(CartValidationError::InvalidAmount(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CartValidationError::DuplicatedProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of all amounts.
    pub fn total_amount(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.amount)).sum()
    }

    /// Sum of price times amount; products without a price count as zero.
    pub fn subtotal(&self) -> f64 {
        self.products.iter().map(Product::subtotal).sum()
    }

    /// Returns a cart where only the entry for `id` carries `amount`.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Self {
        let products = self
            .products
            .iter()
            .map(|product| {
                if product.id == id {
                    Product {
                        amount,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .collect();
        Self { products }
    }

    /// Returns a cart with `product` appended. The caller guarantees the id is new.
    pub fn with_product(&self, product: Product) -> Self {
        let mut products = self.products.clone();
        products.push(Product {
            details: product.details.without_reserved_keys(),
            ..product
        });
        Self { products }
    }

    pub fn without(&self, id: ProductId) -> Self {
        let products = self
            .products
            .iter()
            .filter(|product| product.id != id)
            .cloned()
            .collect();
        Self { products }
    }
}
