use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::CreateProductUseCase;
use crate::domain::product::use_cases::delete::DeleteProductUseCase;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use crate::domain::product::use_cases::get_by_name::GetProductByNameUseCase;
use crate::domain::product::use_cases::update::UpdateProductUseCase;

use super::create::CreateProductUseCaseImpl;
use super::delete::DeleteProductUseCaseImpl;
use super::get_all::GetAllProductsUseCaseImpl;
use super::get_by_id::GetProductByIdUseCaseImpl;
use super::get_by_name::GetProductByNameUseCaseImpl;
use super::update::UpdateProductUseCaseImpl;

/// Every catalog use case, bound to one storage adapter.
///
/// The use cases hold no state of their own, so a catalog can be cloned and
/// shared freely between concurrent callers.
#[derive(Clone)]
pub struct ProductCatalog {
    pub create: Arc<dyn CreateProductUseCase>,
    pub get_all: Arc<dyn GetAllProductsUseCase>,
    pub get_by_id: Arc<dyn GetProductByIdUseCase>,
    pub get_by_name: Arc<dyn GetProductByNameUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
}

impl ProductCatalog {
    pub fn new(repository: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            create: Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_all: Arc::new(GetAllProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_by_name: Arc::new(GetProductByNameUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            update: Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteProductUseCaseImpl { repository, logger }),
        }
    }
}
