use poem_openapi::Object;
use serde_json::Value;

use business::domain::cart::model::{Cart, Product};

#[derive(Debug, Clone, Object)]
pub struct UpdateProductAmountRequest {
    /// Absolute quantity requested (must be between 1 and the available stock)
    pub amount: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartProductResponse {
    /// Catalog product identifier
    pub id: u64,
    /// Quantity in the cart
    pub amount: u32,
    /// Display name
    pub name: String,
    /// Unit price
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Image URL
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Unit price times amount
    pub subtotal: f64,
    /// Any other catalog fields, as received
    #[oai(skip_serializing_if_is_none)]
    pub extra: Option<Value>,
}

impl From<Product> for CartProductResponse {
    fn from(product: Product) -> Self {
        let subtotal = product.subtotal();
        let details = product.details;
        Self {
            id: product.id.as_u64(),
            amount: product.amount,
            name: details.name,
            price: details.price,
            image: details.image,
            subtotal,
            extra: (!details.extra.is_empty()).then(|| Value::Object(details.extra)),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart lines in insertion order
    pub products: Vec<CartProductResponse>,
    /// Number of distinct products
    pub size: u64,
    /// Sum of all amounts
    pub total_amount: u64,
    /// Sum of line subtotals
    pub subtotal: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let size = cart.len() as u64;
        let total_amount = cart.total_amount();
        let subtotal = cart.subtotal();
        Self {
            products: cart.into_products().into_iter().map(Into::into).collect(),
            size,
            total_amount,
            subtotal,
        }
    }
}
