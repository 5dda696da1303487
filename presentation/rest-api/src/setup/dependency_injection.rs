use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::catalog::ProductCatalog;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::database_config::{StorageBackend, StorageConfig, init_database};

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(storage: &StorageBackend, repository: Arc<dyn ProductRepository>) -> Self {
        let logger = Arc::new(TracingLogger);
        let catalog = ProductCatalog::new(repository, logger);

        Self {
            health_api: HealthApi::new(storage.as_str()),
            product_api: ProductApi::new(catalog),
        }
    }
}

/// Builds the product store selected by `STORAGE_BACKEND`.
///
/// The postgres store connects and applies migrations before returning.
pub async fn build_repository(config: &StorageConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config.backend {
        StorageBackend::Postgres => {
            let pool = init_database(config).await?;
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory product store, data is lost on restart");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
    }
}
