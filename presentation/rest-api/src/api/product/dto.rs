use std::str::FromStr;

use bigdecimal::BigDecimal;
use poem_openapi::Object;

use business::domain::product::model::Product;

/// Body of product create and update requests.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty, unique across the catalog)
    pub name: String,
    /// Free-text description
    #[oai(default)]
    pub description: String,
    /// Price as a decimal number (cannot be negative)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier, assigned on creation
    pub id: i64,
    /// Product name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Price as a decimal number
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: price_to_wire(&product.price),
        }
    }
}

/// Converts a JSON number to an exact decimal through its shortest
/// round-trip representation, so `9.99` stays `9.99`.
pub fn price_from_wire(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

pub fn price_to_wire(price: &BigDecimal) -> f64 {
    price.to_string().parse().unwrap_or_default()
}
