use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = NewProduct::new(ProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
        })?;

        if self.repository.find_by_name(&product.name).await?.is_some() {
            self.logger
                .warn(&format!("Product name already taken: {}", product.name));
            return Err(ProductError::AlreadyExists(product.name));
        }

        // The lookup above is not atomic with the insert; the store's own
        // uniqueness constraint catches concurrent creators.
        let created = self
            .repository
            .create(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => {
                    self.logger.warn(&format!(
                        "Product name taken concurrently: {}",
                        product.name
                    ));
                    ProductError::AlreadyExists(product.name.clone())
                }
                other => ProductError::Unknown(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}
