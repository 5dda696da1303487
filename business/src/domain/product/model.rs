use bigdecimal::BigDecimal;
use num_traits::Signed;

use super::errors::{ProductError, ValidationError};
use super::value_objects::ProductId;

/// A product as it exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

/// Raw product fields as supplied by a caller.
#[derive(Debug, Clone)]
pub struct ProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

/// A validated product that has not been persisted yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

fn validate(props: &ProductProps) -> Result<(), ValidationError> {
    if props.name.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }

    if props.price.is_negative() {
        return Err(ValidationError::NegativePrice);
    }

    Ok(())
}

impl NewProduct {
    pub fn new(props: ProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        Ok(Self {
            name: props.name,
            description: props.description,
            price: props.price,
        })
    }
}

impl Product {
    /// Replaces every field of an existing product, keeping its id.
    pub fn replaced(id: ProductId, props: ProductProps) -> Result<Self, ProductError> {
        let fields = NewProduct::new(props)?;
        Ok(Self::from_new(id, fields))
    }

    /// Attaches the storage-assigned id to a freshly created product.
    pub fn from_new(id: ProductId, product: NewProduct) -> Self {
        Self {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        price: BigDecimal,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
        }
    }
}
