use contracts::realtime::OrderEvent;
use tokio::sync::broadcast;

/// Fan-out hub for order lifecycle events.
///
/// Wraps a tokio broadcast channel: every websocket connection holds its own
/// receiver, publishing never blocks the sending request, and events emitted
/// while nobody listens are simply dropped. There is no backlog and no
/// replay for late subscribers.
#[derive(Clone)]
pub struct Broadcaster {
    tx: broadcast::Sender<OrderEvent>,
}

impl Broadcaster {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// A send error only means zero receivers, which is not a failure.
    pub fn publish(&self, event: OrderEvent) {
        let name = event.name();
        match self.tx.send(event) {
            Ok(receivers) => {
                tracing::debug!("broadcast {} to {} subscriber(s)", name, receivers)
            }
            Err(_) => tracing::debug!("no realtime subscribers for {}", name),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::aggregate::{Order, OrderDraft, OrderItem, OrderType};

    fn sample_order() -> Order {
        Order::new_for_insert(OrderDraft {
            order_type: OrderType::Delivery,
            customer_name: "Meera".to_string(),
            mobile: String::new(),
            table_number: None,
            address: Some("12 MG Road".to_string()),
            items: vec![OrderItem {
                name: "Paneer Roll".to_string(),
                price: 90.0,
                qty: 1,
            }],
        })
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_fine() {
        let broadcaster = Broadcaster::new(8);
        assert_eq!(broadcaster.subscriber_count(), 0);
        broadcaster.publish(OrderEvent::NewOrder(sample_order()));
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let broadcaster = Broadcaster::new(8);
        let mut rx = broadcaster.subscribe();

        let order = sample_order();
        let id = order.to_string_id();
        broadcaster.publish(OrderEvent::NewOrder(order));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name(), "newOrder");
        assert_eq!(event.order().to_string_id(), id);
    }

    #[tokio::test]
    async fn test_each_subscriber_sees_every_event() {
        let broadcaster = Broadcaster::new(8);
        let mut first = broadcaster.subscribe();
        let mut second = broadcaster.subscribe();

        broadcaster.publish(OrderEvent::OrderUpdated(sample_order()));

        assert_eq!(first.recv().await.unwrap().name(), "orderUpdated");
        assert_eq!(second.recv().await.unwrap().name(), "orderUpdated");
    }
}
