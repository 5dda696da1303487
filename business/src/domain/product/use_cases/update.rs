use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Full replacement of a product's fields; not a partial patch.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
