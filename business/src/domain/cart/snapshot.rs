//! Stored representation of a cart.
//!
//! Carts are written as a versioned JSON envelope:
//!
//! ```json
//! { "version": 1, "products": [ { "id": 1, "amount": 2, "name": "..." } ] }
//! ```
//!
//! A bare JSON array of products (the layout used before the envelope) is
//! still accepted on read.

use serde::{Deserialize, Serialize};

use crate::domain::errors::RepositoryError;

use super::errors::SnapshotError;
use super::model::{Cart, Product};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredCartRef<'a> {
    version: u32,
    products: &'a [Product],
}

#[derive(Deserialize)]
struct StoredCart {
    version: u32,
    products: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLayout {
    Versioned(StoredCart),
    Legacy(Vec<Product>),
}

pub fn encode(cart: &Cart) -> Result<Vec<u8>, RepositoryError> {
    serde_json::to_vec(&StoredCartRef {
        version: SCHEMA_VERSION,
        products: cart.products(),
    })
    .map_err(|_| RepositoryError::Serialization)
}

pub fn decode(bytes: &[u8]) -> Result<Cart, SnapshotError> {
    let layout: StoredLayout =
        serde_json::from_slice(bytes).map_err(|_| SnapshotError::Malformed)?;

    let products = match layout {
        StoredLayout::Versioned(stored) if stored.version == SCHEMA_VERSION => stored.products,
        StoredLayout::Versioned(stored) => {
            return Err(SnapshotError::UnsupportedVersion(stored.version));
        }
        StoredLayout::Legacy(products) => products,
    };

    Ok(Cart::from_products(products)?)
}
