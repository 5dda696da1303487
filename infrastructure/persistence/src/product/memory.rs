use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

#[derive(Debug)]
struct Store {
    next_id: i64,
    products: BTreeMap<ProductId, Product>,
}

impl Store {
    fn name_taken_by_other(&self, name: &str, id: Option<ProductId>) -> bool {
        self.products
            .values()
            .any(|p| p.name == name && Some(p.id) != id)
    }
}

/// In-memory product store for tests and database-less runs.
///
/// Mirrors the SQL schema: ids start at 1 and are never reused, and names are
/// unique on both insert and update. Every call takes the lock once, so each
/// call is atomic on its own.
#[derive(Debug)]
pub struct ProductRepositoryInMemory {
    store: RwLock<Store>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                products: BTreeMap::new(),
            }),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.products.values().find(|p| p.name == name).cloned())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut store = self.store.write().await;
        if store.name_taken_by_other(&product.name, None) {
            return Err(RepositoryError::Duplicated);
        }

        let id = ProductId::new(store.next_id);
        store.next_id += 1;

        let created = Product::from_new(id, product.clone());
        store.products.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut store = self.store.write().await;
        if !store.products.contains_key(&product.id) {
            return Err(RepositoryError::NotFound);
        }
        if store.name_taken_by_other(&product.name, Some(product.id)) {
            return Err(RepositoryError::Duplicated);
        }

        store.products.insert(product.id, product.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
