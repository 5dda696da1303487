use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::value_objects::ProductKey;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.repository
            .find_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound(ProductKey::Id(params.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
            async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let product_id = ProductId::new(1);
        let mut mock_repo = MockProductRepo::new();

        mock_repo
            .expect_find_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |_| {
                Ok(Some(Product::from_repository(
                    product_id,
                    "Widget".to_string(),
                    "A widget".to_string(),
                    BigDecimal::from_str("9.99").unwrap(),
                )))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await
            .unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, BigDecimal::from_str("9.99").unwrap());
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_absent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(999),
            })
            .await;

        let error = result.unwrap_err();
        assert!(matches!(
            error,
            ProductError::NotFound(ProductKey::Id(id)) if id == ProductId::new(999)
        ));
        assert_eq!(error.to_string(), "product with id 999 not found");
    }

    #[tokio::test]
    async fn should_surface_unknown_failure_when_lookup_breaks() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::database_error("timeout")));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Unknown(_)));
    }
}
