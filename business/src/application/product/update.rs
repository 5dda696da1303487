use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductKey;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let replacement = Product::replaced(
            params.id,
            ProductProps {
                name: params.name,
                description: params.description,
                price: params.price,
            },
        )?;

        let not_found = || ProductError::NotFound(ProductKey::Id(params.id));

        // Verify product exists
        self.repository
            .find_by_id(params.id)
            .await?
            .ok_or_else(not_found)?;

        // Name uniqueness against other products is not re-checked here; only
        // the store's own constraint can reject a colliding rename.
        let updated = self
            .repository
            .update(&replacement)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => not_found(),
                RepositoryError::Duplicated => {
                    ProductError::AlreadyExists(replacement.name.clone())
                }
                other => ProductError::Unknown(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
