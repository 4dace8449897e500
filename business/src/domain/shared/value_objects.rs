use serde::{Deserialize, Serialize};

/// Catalog identifier of a product.
/// Serialized as a bare integer so stored carts stay readable by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn should_convert_from_u64() {
        let id: ProductId = 7.into();
        assert_eq!(id.as_u64(), 7);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");

        let parsed: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, ProductId::new(3));
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        assert_eq!(ProductId::new(1), ProductId::new(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }
}
