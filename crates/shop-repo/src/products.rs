use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use shop_types::domain::product::{Product, ProductFilter};
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::RepoError;

/// Catalog store. Same locking discipline as the user store: the
/// case-insensitive name scan in `create` and the insert happen under one
/// write lock.
#[derive(Clone)]
pub struct InMemoryProductRepo {
    map: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self {
            map: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Product>>, RepoError> {
        self.map
            .read()
            .map_err(|_| RepoError::Storage("product store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Product>>, RepoError> {
        self.map
            .write()
            .map_err(|_| RepoError::Storage("product store lock poisoned".into()))
    }
}

impl Default for InMemoryProductRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn create(&self, product: Product) -> Result<Product, RepoError> {
        let mut map = self.write()?;
        if map
            .values()
            .any(|existing| existing.name.eq_ignore_ascii_case(&product.name))
        {
            return Err(RepoError::Duplicate(
                "product with this name already exists".into(),
            ));
        }
        map.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, RepoError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, RepoError> {
        let mut map = self.write()?;
        if !map.contains_key(&product.id) {
            return Ok(None);
        }
        map.insert(product.id.clone(), product.clone());
        Ok(Some(product))
    }

    async fn update_stock(&self, id: &str, stock: u32) -> Result<Option<Product>, RepoError> {
        let mut map = self.write()?;
        match map.get_mut(id) {
            Some(product) => {
                product.stock = stock;
                product.updated_at = chrono::Utc::now();
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        Ok(self.write()?.remove(id).is_some())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepoError> {
        let mut products: Vec<Product> = self
            .read()?
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        products.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(products)
    }
}
