//! Lifecycle Event Hub
//!
//! Implements order event distribution using tokio broadcast channels for
//! efficient fan-out to multiple subscribers.
//!
//! # Architecture
//!
//! The `OrderEventHub` provides a separate channel per lifecycle topic:
//! - Pending orders, published at creation for restaurant owners
//! - Cooked orders, published for delivery drivers browsing pickups
//! - Order updates, published on every status change for attached parties
//!
//! The hub is constructed once at startup and injected wherever events are
//! published or consumed; its lifetime is the process lifetime. Publishing
//! never blocks on subscribers: a slow receiver overruns its own buffer and
//! skips ahead, it cannot stall the publisher.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::domain::ordering::Order;
use crate::domain::shared::UserId;
use crate::infrastructure::config::EventBusSettings;

// =============================================================================
// Broadcast Messages
// =============================================================================

/// Pending order broadcast message.
///
/// Carries the owner's identity alongside the order so subscriptions can
/// filter to the one owner whose restaurant received it.
#[derive(Debug, Clone)]
pub struct PendingOrderBroadcast {
    /// The newly created order.
    pub order: Order,
    /// Owner of the restaurant the order was placed with.
    pub owner_id: UserId,
}

/// Cooked order broadcast message.
#[derive(Debug, Clone)]
pub struct CookedOrderBroadcast {
    /// The order that just finished cooking.
    pub order: Order,
}

/// Order update broadcast message.
#[derive(Debug, Clone)]
pub struct OrderUpdateBroadcast {
    /// The order after the update.
    pub order: Order,
}

// =============================================================================
// Event Hub
// =============================================================================

/// Configuration for event channel capacities.
#[derive(Debug, Clone, Copy)]
pub struct EventHubConfig {
    /// Capacity for the pending order channel.
    pub pending_orders_capacity: usize,
    /// Capacity for the cooked order channel.
    pub cooked_orders_capacity: usize,
    /// Capacity for the order update channel.
    pub order_updates_capacity: usize,
}

impl Default for EventHubConfig {
    fn default() -> Self {
        Self {
            pending_orders_capacity: 1_024,
            cooked_orders_capacity: 1_024,
            order_updates_capacity: 4_096,
        }
    }
}

impl From<EventBusSettings> for EventHubConfig {
    fn from(settings: EventBusSettings) -> Self {
        Self {
            pending_orders_capacity: settings.pending_orders_capacity,
            cooked_orders_capacity: settings.cooked_orders_capacity,
            order_updates_capacity: settings.order_updates_capacity,
        }
    }
}

/// Central hub for all lifecycle event channels.
///
/// Provides one channel per topic with configurable capacities. Supports
/// multiple receivers per channel; ordering is FIFO within a topic, and a
/// receiver only ever sees events published after it subscribed.
///
/// # Example
///
/// ```rust
/// use order_engine::infrastructure::events::{EventHubConfig, OrderEventHub};
///
/// let hub = OrderEventHub::new(EventHubConfig::default());
///
/// // Get a receiver for cooked orders
/// let mut rx = hub.cooked_orders_rx();
///
/// // In another task, publish orders
/// // hub.publish_cooked_order(order);
/// ```
#[derive(Debug)]
pub struct OrderEventHub {
    pending_orders_tx: broadcast::Sender<PendingOrderBroadcast>,
    cooked_orders_tx: broadcast::Sender<CookedOrderBroadcast>,
    order_updates_tx: broadcast::Sender<OrderUpdateBroadcast>,
}

impl OrderEventHub {
    /// Create a new event hub with the given configuration.
    #[must_use]
    pub fn new(config: EventHubConfig) -> Self {
        Self {
            pending_orders_tx: broadcast::channel(config.pending_orders_capacity).0,
            cooked_orders_tx: broadcast::channel(config.cooked_orders_capacity).0,
            order_updates_tx: broadcast::channel(config.order_updates_capacity).0,
        }
    }

    /// Create a new event hub with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(EventHubConfig::default())
    }

    // =========================================================================
    // Pending Order Channel
    // =========================================================================

    /// Publish a newly created order to all subscribers.
    ///
    /// Returns the number of receivers that got the message, or `None` if
    /// there are no active receivers.
    #[must_use]
    pub fn publish_pending_order(&self, order: Order, owner_id: UserId) -> Option<usize> {
        self.pending_orders_tx
            .send(PendingOrderBroadcast { order, owner_id })
            .ok()
    }

    /// Get a new receiver for pending orders.
    #[must_use]
    pub fn pending_orders_rx(&self) -> broadcast::Receiver<PendingOrderBroadcast> {
        self.pending_orders_tx.subscribe()
    }

    /// Get the number of active pending order receivers.
    #[must_use]
    pub fn pending_orders_receiver_count(&self) -> usize {
        self.pending_orders_tx.receiver_count()
    }

    // =========================================================================
    // Cooked Order Channel
    // =========================================================================

    /// Publish a cooked order to all subscribers.
    #[must_use]
    pub fn publish_cooked_order(&self, order: Order) -> Option<usize> {
        self.cooked_orders_tx
            .send(CookedOrderBroadcast { order })
            .ok()
    }

    /// Get a new receiver for cooked orders.
    #[must_use]
    pub fn cooked_orders_rx(&self) -> broadcast::Receiver<CookedOrderBroadcast> {
        self.cooked_orders_tx.subscribe()
    }

    /// Get the number of active cooked order receivers.
    #[must_use]
    pub fn cooked_orders_receiver_count(&self) -> usize {
        self.cooked_orders_tx.receiver_count()
    }

    // =========================================================================
    // Order Update Channel
    // =========================================================================

    /// Publish an order update to all subscribers.
    #[must_use]
    pub fn publish_order_update(&self, order: Order) -> Option<usize> {
        self.order_updates_tx
            .send(OrderUpdateBroadcast { order })
            .ok()
    }

    /// Get a new receiver for order updates.
    #[must_use]
    pub fn order_updates_rx(&self) -> broadcast::Receiver<OrderUpdateBroadcast> {
        self.order_updates_tx.subscribe()
    }

    /// Get the number of active order update receivers.
    #[must_use]
    pub fn order_updates_receiver_count(&self) -> usize {
        self.order_updates_tx.receiver_count()
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Get statistics about all channels.
    #[must_use]
    pub fn stats(&self) -> EventHubStats {
        EventHubStats {
            pending_orders_receivers: self.pending_orders_receiver_count(),
            cooked_orders_receivers: self.cooked_orders_receiver_count(),
            order_updates_receivers: self.order_updates_receiver_count(),
        }
    }
}

/// Shared event hub reference.
pub type SharedOrderEventHub = Arc<OrderEventHub>;

/// Statistics about event channels.
#[derive(Debug, Clone, Default)]
pub struct EventHubStats {
    /// Number of pending order receivers.
    pub pending_orders_receivers: usize,
    /// Number of cooked order receivers.
    pub cooked_orders_receivers: usize,
    /// Number of order update receivers.
    pub order_updates_receivers: usize,
}

impl EventHubStats {
    /// Get total number of receivers across all channels.
    #[must_use]
    pub const fn total_receivers(&self) -> usize {
        self.pending_orders_receivers + self.cooked_orders_receivers + self.order_updates_receivers
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::{OrderStatus, ReconstitutedOrderParams, RestaurantRef};
    use crate::domain::shared::{Money, OrderId, RestaurantId, Timestamp};

    fn make_test_order(id: i64) -> Order {
        Order::reconstitute(ReconstitutedOrderParams {
            id: OrderId::new(id),
            customer_id: Some(UserId::new(10)),
            driver_id: None,
            restaurant: RestaurantRef {
                id: RestaurantId::new(5),
                owner_id: UserId::new(20),
            },
            items: vec![],
            total: Some(Money::from_cents(1200)),
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        })
    }

    #[test]
    fn event_hub_creation() {
        let hub = OrderEventHub::with_defaults();
        assert_eq!(hub.pending_orders_receiver_count(), 0);
        assert_eq!(hub.cooked_orders_receiver_count(), 0);
        assert_eq!(hub.order_updates_receiver_count(), 0);
    }

    #[test]
    fn receiver_count_increases() {
        let hub = OrderEventHub::with_defaults();

        let _rx1 = hub.order_updates_rx();
        assert_eq!(hub.order_updates_receiver_count(), 1);

        let _rx2 = hub.order_updates_rx();
        assert_eq!(hub.order_updates_receiver_count(), 2);
    }

    #[test]
    fn receiver_count_decreases_on_drop() {
        let hub = OrderEventHub::with_defaults();

        {
            let _rx1 = hub.order_updates_rx();
            assert_eq!(hub.order_updates_receiver_count(), 1);
        }

        // rx1 dropped
        assert_eq!(hub.order_updates_receiver_count(), 0);
    }

    #[tokio::test]
    async fn publish_and_receive_pending_order() {
        let hub = OrderEventHub::with_defaults();
        let mut rx = hub.pending_orders_rx();

        let delivered = hub.publish_pending_order(make_test_order(1), UserId::new(20));
        assert_eq!(delivered, Some(1));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.order.id(), OrderId::new(1));
        assert_eq!(received.owner_id, UserId::new(20));
    }

    #[tokio::test]
    async fn multiple_receivers_get_same_message() {
        let hub = OrderEventHub::with_defaults();
        let mut rx1 = hub.cooked_orders_rx();
        let mut rx2 = hub.cooked_orders_rx();

        let _ = hub.publish_cooked_order(make_test_order(7));

        let r1 = rx1.recv().await.unwrap();
        let r2 = rx2.recv().await.unwrap();

        assert_eq!(r1.order.id(), r2.order.id());
    }

    #[tokio::test]
    async fn updates_arrive_in_publish_order() {
        let hub = OrderEventHub::with_defaults();
        let mut rx = hub.order_updates_rx();

        let _ = hub.publish_order_update(make_test_order(1));
        let _ = hub.publish_order_update(make_test_order(2));
        let _ = hub.publish_order_update(make_test_order(3));

        assert_eq!(rx.recv().await.unwrap().order.id(), OrderId::new(1));
        assert_eq!(rx.recv().await.unwrap().order.id(), OrderId::new(2));
        assert_eq!(rx.recv().await.unwrap().order.id(), OrderId::new(3));
    }

    #[test]
    fn publish_with_no_receivers_returns_none() {
        let hub = OrderEventHub::with_defaults();
        // With no receivers, send returns Err which we map to None
        assert!(hub.publish_cooked_order(make_test_order(1)).is_none());
    }

    #[tokio::test]
    async fn late_subscriber_sees_no_past_events() {
        let hub = OrderEventHub::with_defaults();

        let _keepalive = hub.order_updates_rx();
        let _ = hub.publish_order_update(make_test_order(1));

        let mut late = hub.order_updates_rx();
        let _ = hub.publish_order_update(make_test_order(2));

        // The late receiver starts at the point of subscription.
        assert_eq!(late.recv().await.unwrap().order.id(), OrderId::new(2));
    }

    #[test]
    fn stats_reflect_all_channels() {
        let hub = OrderEventHub::with_defaults();

        let _rx1 = hub.pending_orders_rx();
        let _rx2 = hub.cooked_orders_rx();
        let _rx3 = hub.order_updates_rx();
        let _rx4 = hub.order_updates_rx();

        let stats = hub.stats();
        assert_eq!(stats.pending_orders_receivers, 1);
        assert_eq!(stats.cooked_orders_receivers, 1);
        assert_eq!(stats.order_updates_receivers, 2);
        assert_eq!(stats.total_receivers(), 4);
    }

    #[test]
    fn custom_config() {
        let config = EventHubConfig {
            pending_orders_capacity: 64,
            cooked_orders_capacity: 64,
            order_updates_capacity: 128,
        };
        let _hub = OrderEventHub::new(config);
        // Just verify it creates successfully with custom config
    }
}
