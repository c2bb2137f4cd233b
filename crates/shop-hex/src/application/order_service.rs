use crate::errors::AppError;
use shop_types::domain::order::{CreateOrderItem, Order, OrderStatus};
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::validation::OrderValidation;

/// The order workflow: validates references against the user and product
/// services through the validation port, then constructs and persists the
/// order. Creation is all-or-nothing; any validation failure leaves the
/// store untouched.
pub struct OrderService<R: OrderRepository, V: OrderValidation> {
    repo: R,
    validator: V,
}

impl<R, V> OrderService<R, V>
where
    R: OrderRepository,
    V: OrderValidation,
{
    pub fn new(repo: R, validator: V) -> Self {
        Self { repo, validator }
    }

    pub async fn create_order(
        &self,
        user_id: String,
        items: Vec<CreateOrderItem>,
    ) -> Result<Order, AppError> {
        if user_id.trim().is_empty() || items.is_empty() {
            return Err(AppError::BadRequest(
                "User ID and at least one item are required".into(),
            ));
        }
        if items.iter().any(|item| item.quantity == 0) {
            return Err(AppError::BadRequest(
                "Item quantity must be greater than zero".into(),
            ));
        }

        // A downstream outage and a genuinely unknown user produce the
        // same client-facing rejection; the distinction only reaches the
        // logs.
        if let Err(err) = self.validator.check_user_exists(&user_id).await {
            tracing::warn!(%user_id, error = %err, "user validation failed");
            return Err(AppError::BadRequest("Invalid user ID".into()));
        }

        let order_items = self
            .validator
            .validate_order_items(&items)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "order item validation failed");
                AppError::BadRequest(err.to_string())
            })?;

        let order = Order::new(user_id, order_items);
        Ok(self.repo.create(order).await?)
    }

    pub async fn get_order(&self, id: &str) -> Result<Order, AppError> {
        match self.repo.get(id).await? {
            Some(order) => Ok(order),
            None => Err(AppError::NotFound("Order not found".into())),
        }
    }

    /// Listing a user's orders re-validates the user reference, matching
    /// the creation path.
    pub async fn get_user_orders(&self, user_id: &str) -> Result<Vec<Order>, AppError> {
        if let Err(err) = self.validator.check_user_exists(user_id).await {
            tracing::warn!(%user_id, error = %err, "user validation failed");
            return Err(AppError::BadRequest("Invalid user ID".into()));
        }
        Ok(self.repo.get_by_user(user_id).await?)
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.repo.list().await?)
    }

    /// Transitions out of a terminal state are rejected, and cancellation
    /// is only possible while the order is pending or confirmed. Between
    /// the remaining states any target is accepted; forward progression
    /// is not enforced.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, AppError> {
        let mut order = match self.repo.get(id).await? {
            Some(order) => order,
            None => return Err(AppError::NotFound("Order not found".into())),
        };

        if order.status.is_terminal() {
            return Err(AppError::BadRequest(
                "Order status can no longer be changed".into(),
            ));
        }
        if status == OrderStatus::Cancelled && !order.can_be_cancelled() {
            return Err(AppError::BadRequest(
                "Order cannot be cancelled in current status".into(),
            ));
        }

        order.update_status(status);
        match self.repo.update(order).await? {
            Some(updated) => Ok(updated),
            None => Err(AppError::NotFound("Order not found".into())),
        }
    }
}
