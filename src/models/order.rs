use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::table::{HasStatus, Searchable};

/// Enum representing the possible statuses of an order.
///
/// Progression is forward-only in the UI (pending/processing → shipped →
/// delivered) but nothing in the model enforces it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Translation key of the status badge label
    pub fn translation_key(self) -> &'static str {
        self.into()
    }

    /// Whether the "mark as shipped" action is offered for this status.
    pub fn can_ship(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }

    /// Whether the "mark as delivered" action is offered for this status.
    pub fn can_deliver(self) -> bool {
        self == OrderStatus::Shipped
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

/// A customer order. Orders do not reference products or line items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Unique order number, e.g. `ORD-2025-0001`. Assumed unique, never enforced.
    pub order_number: String,
    pub customer: Customer,
    pub status: OrderStatus,
    pub total: Decimal,
    /// Number of items in the order.
    pub items: u32,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.customer.name.as_str(),
            self.customer.email.as_str(),
        ]
    }
}

impl HasStatus for Order {
    type Status = OrderStatus;

    fn status(&self) -> OrderStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_open_orders_can_ship() {
        let shippable: Vec<_> = OrderStatus::iter().filter(|s| s.can_ship()).collect();
        assert_eq!(shippable, vec![OrderStatus::Pending, OrderStatus::Processing]);
    }

    #[test]
    fn only_shipped_orders_can_be_delivered() {
        let deliverable: Vec<_> = OrderStatus::iter().filter(|s| s.can_deliver()).collect();
        assert_eq!(deliverable, vec![OrderStatus::Shipped]);
    }

    #[test]
    fn serializes_with_ui_field_names() {
        let order = Order {
            id: "9".into(),
            order_number: "ORD-2025-0009".into(),
            customer: Customer {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
            status: OrderStatus::Processing,
            total: Decimal::new(1999, 2),
            items: 1,
            date: DateTime::<Utc>::default(),
            tracking_id: None,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderNumber"], "ORD-2025-0009");
        assert_eq!(json["status"], "processing");
        assert!(json.get("trackingId").is_none());
    }
}
