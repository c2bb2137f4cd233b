use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use shop_types::domain::order::Order;
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::RepoError;

#[derive(Clone)]
pub struct InMemoryOrderRepo {
    map: Arc<DashMap<String, Order>>,
}

impl InMemoryOrderRepo {
    pub fn new() -> Self {
        Self {
            map: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryOrderRepo {
    fn default() -> Self {
        Self::new()
    }
}

// Map iteration order is unstable; listings sort on (created_at, id) so
// responses stay deterministic.
fn sorted(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    orders
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepo {
    async fn create(&self, order: Order) -> Result<Order, RepoError> {
        self.map.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn get(&self, id: &str) -> Result<Option<Order>, RepoError> {
        Ok(self.map.get(id).map(|entry| entry.value().clone()))
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Order>, RepoError> {
        let matches = self
            .map
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        Ok(sorted(matches))
    }

    async fn update(&self, order: Order) -> Result<Option<Order>, RepoError> {
        if let Some(mut entry) = self.map.get_mut(&order.id) {
            *entry = order.clone();
            return Ok(Some(order));
        }
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        let all = self.map.iter().map(|entry| entry.value().clone()).collect();
        Ok(sorted(all))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        Ok(self.map.remove(id).is_some())
    }
}
