use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for customer orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "dine-in")]
    DineIn,
    #[serde(rename = "delivery")]
    Delivery,
    #[serde(rename = "takeaway")]
    Takeaway,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::Delivery => "delivery",
            OrderType::Takeaway => "takeaway",
        }
    }
}

impl std::str::FromStr for OrderType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dine-in" => Ok(OrderType::DineIn),
            "delivery" => Ok(OrderType::Delivery),
            "takeaway" => Ok(OrderType::Takeaway),
            other => Err(format!("unknown order type '{}'", other)),
        }
    }
}

/// Kitchen-facing lifecycle of an order. There is no transition graph:
/// any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Incoming,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Incoming => "incoming",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incoming" => Ok(OrderStatus::Incoming),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// Historical status value that marks an order as soft-deleted instead of
/// being stored as a regular status.
pub const DELETED_SENTINEL: &str = "deleted";

/// A parsed status-update request: a regular status value, or the
/// `"deleted"` sentinel which flips the soft-delete flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPatch {
    Set(OrderStatus),
    SoftDelete,
}

impl StatusPatch {
    pub fn parse(s: &str) -> Result<Self, String> {
        if s == DELETED_SENTINEL {
            return Ok(StatusPatch::SoftDelete);
        }
        s.parse().map(StatusPatch::Set)
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.qty as f64
    }
}

/// A customer order (the sole persisted aggregate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    #[serde(rename = "orderType")]
    pub order_type: OrderType,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    /// Display data only, never used as a key.
    pub mobile: String,

    /// Populated for dine-in orders.
    #[serde(rename = "tableNumber")]
    pub table_number: Option<String>,

    /// Populated for delivery orders.
    pub address: Option<String>,

    pub items: Vec<OrderItem>,

    /// Fixed at creation; no update path recomputes it.
    pub total: f64,

    pub status: OrderStatus,

    #[serde(rename = "isDeleted")]
    pub is_deleted: bool,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build the record that goes into the store for a new order: fresh id,
    /// computed total, `incoming` status, creation timestamp.
    pub fn new_for_insert(draft: OrderDraft) -> Self {
        let total = draft.total();
        Self {
            id: OrderId::new_v4(),
            order_type: draft.order_type,
            customer_name: draft.customer_name,
            mobile: draft.mobile,
            table_number: draft.table_number,
            address: draft.address,
            items: draft.items,
            total,
            status: OrderStatus::Incoming,
            is_deleted: false,
            created_at: Utc::now(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

/// Client-submitted payload for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "orderType")]
    pub order_type: OrderType,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    #[serde(default)]
    pub mobile: String,

    #[serde(rename = "tableNumber", default)]
    pub table_number: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    pub items: Vec<OrderItem>,
}

impl OrderDraft {
    /// Σ price × qty over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("order needs at least one item".into());
        }
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err("item name cannot be empty".into());
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(format!("item '{}' has an invalid price", item.name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(items: Vec<OrderItem>) -> OrderDraft {
        OrderDraft {
            order_type: OrderType::DineIn,
            customer_name: "Asha".to_string(),
            mobile: "9876543210".to_string(),
            table_number: Some("4".to_string()),
            address: None,
            items,
        }
    }

    #[test]
    fn test_total_is_sum_of_price_times_qty() {
        let draft = draft_with(vec![
            OrderItem {
                name: "Masala Dosa".to_string(),
                price: 80.0,
                qty: 2,
            },
            OrderItem {
                name: "Filter Coffee".to_string(),
                price: 25.0,
                qty: 3,
            },
        ]);
        assert_eq!(draft.total(), 235.0);

        let order = Order::new_for_insert(draft);
        assert_eq!(order.total, 235.0);
        assert_eq!(order.status, OrderStatus::Incoming);
        assert!(!order.is_deleted);
    }

    #[test]
    fn test_validate_rejects_bad_items() {
        assert!(draft_with(vec![]).validate().is_err());
        assert!(draft_with(vec![OrderItem {
            name: "  ".to_string(),
            price: 10.0,
            qty: 1,
        }])
        .validate()
        .is_err());
        assert!(draft_with(vec![OrderItem {
            name: "Samosa".to_string(),
            price: -5.0,
            qty: 1,
        }])
        .validate()
        .is_err());
        assert!(draft_with(vec![OrderItem {
            name: "Samosa".to_string(),
            price: 15.0,
            qty: 2,
        }])
        .validate()
        .is_ok());
    }

    #[test]
    fn test_status_patch_parse() {
        assert_eq!(
            StatusPatch::parse("preparing"),
            Ok(StatusPatch::Set(OrderStatus::Preparing))
        );
        assert_eq!(StatusPatch::parse("deleted"), Ok(StatusPatch::SoftDelete));
        assert!(StatusPatch::parse("archived").is_err());
    }

    #[test]
    fn test_order_wire_shape() {
        let order = Order::new_for_insert(draft_with(vec![OrderItem {
            name: "Idli".to_string(),
            price: 40.0,
            qty: 1,
        }]));
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["orderType"], "dine-in");
        assert_eq!(value["customerName"], "Asha");
        assert_eq!(value["tableNumber"], "4");
        assert_eq!(value["status"], "incoming");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_order_type_round_trip() {
        for raw in ["dine-in", "delivery", "takeaway"] {
            let parsed: OrderType = raw.parse().unwrap();
            assert_eq!(parsed.as_str(), raw);
        }
        assert!("drive-through".parse::<OrderType>().is_err());
    }
}
