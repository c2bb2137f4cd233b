use async_trait::async_trait;

use crate::domain::order::Order;
use crate::ports::RepoError;

/// Storage port for orders. The store owns the canonical entities; every
/// read hands back an independent copy, so callers can never reach
/// repository-internal state through a returned value.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Inserts under the order's pre-assigned id. Orders carry no
    /// uniqueness constraint beyond the generated id, so this always
    /// succeeds barring a storage fault.
    async fn create(&self, order: Order) -> Result<Order, RepoError>;

    async fn get(&self, id: &str) -> Result<Option<Order>, RepoError>;

    /// All orders for one user, creation-time ascending (id as tiebreak).
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Order>, RepoError>;

    /// Replaces an existing order. `None` when the id is absent; an
    /// update can never create.
    async fn update(&self, order: Order) -> Result<Option<Order>, RepoError>;

    /// Every stored order, creation-time ascending.
    async fn list(&self) -> Result<Vec<Order>, RepoError>;

    /// `false` when the id was absent.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;
}
