use async_trait::async_trait;

use crate::domain::order::{CreateOrderItem, OrderItem};

/// A failed remote validation, carrying a human-readable reason. The
/// message deliberately does not say whether the downstream service
/// rejected the reference or was unreachable; callers treat both the
/// same way.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Outbound validation seam between the order workflow and the user and
/// product services. Narrow on purpose: tests substitute an
/// implementation returning canned results.
#[async_trait]
pub trait OrderValidation: Send + Sync + 'static {
    async fn check_user_exists(&self, user_id: &str) -> Result<(), ValidationError>;

    /// Resolves every requested line against the catalog, in request
    /// order, producing priced snapshots. All-or-nothing: the first
    /// unresolved product or stock shortfall fails the whole call.
    async fn validate_order_items(
        &self,
        items: &[CreateOrderItem],
    ) -> Result<Vec<OrderItem>, ValidationError>;
}
