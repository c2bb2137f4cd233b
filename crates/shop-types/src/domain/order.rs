use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle states of an order. Lowercase on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid order status")]
pub struct InvalidOrderStatus;

impl OrderStatus {
    /// Delivered and cancelled orders have reached the end of their
    /// lifecycle; no transition leaves either state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(InvalidOrderStatus),
        }
    }
}

/// A single line of an order. `product_name` and `price` are snapshots
/// taken from the catalog at order time; later catalog edits do not
/// rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

impl OrderItem {
    pub fn new(product_id: String, product_name: String, price: f64, quantity: u32) -> Self {
        Self {
            product_id,
            product_name,
            price,
            quantity,
            subtotal: price * quantity as f64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order with a fresh id and the total derived from
    /// the item subtotals. Items are frozen here; no operation mutates the
    /// item list afterwards, so the total stays consistent by construction.
    pub fn new(user_id: String, items: Vec<OrderItem>) -> Self {
        let total_price = items.iter().map(|it| it.subtotal).sum();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            items,
            total_price,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Cancellation is only allowed before fulfilment starts.
    pub fn can_be_cancelled(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Confirmed)
    }
}

/// One requested line in an incoming create-order payload, before the
/// catalog has been consulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderItem {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<CreateOrderItem>,
}

/// The status arrives as a plain string and is checked against the
/// enumeration by the handler, so unknown values produce a uniform
/// bad-request envelope instead of a deserialization reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<OrderItem> {
        vec![
            OrderItem::new("p1".into(), "Widget".into(), 5.0, 2),
            OrderItem::new("p2".into(), "Gadget".into(), 2.5, 1),
        ]
    }

    #[test]
    fn new_order_computes_total_and_defaults_pending() {
        let order = Order::new("u1".into(), items());
        assert_eq!(order.total_price, 12.5);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, order.updated_at);
        assert!(!order.id.is_empty());
    }

    #[test]
    fn order_item_subtotal_is_price_times_quantity() {
        let item = OrderItem::new("p1".into(), "Widget".into(), 9.99, 3);
        assert_eq!(item.subtotal, 9.99 * 3.0);
    }

    #[test]
    fn update_status_refreshes_timestamp() {
        let mut order = Order::new("u1".into(), items());
        let before = order.updated_at;
        order.update_status(OrderStatus::Shipped);
        assert_eq!(order.status, OrderStatus::Shipped);
        assert!(order.updated_at > before);
        assert_eq!(order.created_at, before);
    }

    #[test]
    fn cancellation_window() {
        let mut order = Order::new("u1".into(), items());
        assert!(order.can_be_cancelled());
        order.update_status(OrderStatus::Confirmed);
        assert!(order.can_be_cancelled());
        order.update_status(OrderStatus::Shipped);
        assert!(!order.can_be_cancelled());
        order.update_status(OrderStatus::Delivered);
        assert!(!order.can_be_cancelled());
        order.update_status(OrderStatus::Cancelled);
        assert!(!order.can_be_cancelled());
    }

    #[test]
    fn delivered_and_cancelled_are_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Confirmed.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn status_parses_lowercase_names_only() {
        assert_eq!(
            OrderStatus::from_str("pending").unwrap(),
            OrderStatus::Pending
        );
        assert_eq!(
            OrderStatus::from_str("cancelled").unwrap(),
            OrderStatus::Cancelled
        );
        assert!(OrderStatus::from_str("wrong").is_err());
        assert!(OrderStatus::from_str("Pending").is_err());
        assert!(OrderStatus::from_str("").is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
        let back: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(back, OrderStatus::Shipped);
    }
}
