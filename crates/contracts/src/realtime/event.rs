use serde::{Deserialize, Serialize};

use crate::domain::order::aggregate::Order;

/// Order lifecycle events fanned out to connected displays.
///
/// Each event becomes one JSON text frame of the shape
/// `{"event": "newOrder", "data": {...order...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum OrderEvent {
    #[serde(rename = "newOrder")]
    NewOrder(Order),
    #[serde(rename = "orderUpdated")]
    OrderUpdated(Order),
}

impl OrderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OrderEvent::NewOrder(_) => "newOrder",
            OrderEvent::OrderUpdated(_) => "orderUpdated",
        }
    }

    pub fn order(&self) -> &Order {
        match self {
            OrderEvent::NewOrder(order) | OrderEvent::OrderUpdated(order) => order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::aggregate::{OrderDraft, OrderItem, OrderType};

    #[test]
    fn test_event_frame_shape() {
        let order = Order::new_for_insert(OrderDraft {
            order_type: OrderType::Takeaway,
            customer_name: "Ravi".to_string(),
            mobile: String::new(),
            table_number: None,
            address: None,
            items: vec![OrderItem {
                name: "Vada Pav".to_string(),
                price: 30.0,
                qty: 2,
            }],
        });
        let id = order.to_string_id();

        let event = OrderEvent::NewOrder(order);
        assert_eq!(event.name(), "newOrder");

        let frame = serde_json::to_value(&event).unwrap();
        assert_eq!(frame["event"], "newOrder");
        assert_eq!(frame["data"]["id"], serde_json::json!(id));
        assert_eq!(frame["data"]["total"], 60.0);
    }
}
