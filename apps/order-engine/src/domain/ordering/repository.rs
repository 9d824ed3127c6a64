//! Order Gateway Trait
//!
//! Defines the persistence abstraction for orders and their line items.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::{Order, RestaurantRef};
use super::services::ResolvedItem;
use super::value_objects::{OrderItem, OrderItemOption, OrderStatus};
use crate::domain::shared::{DishId, GatewayError, Money, OrderId, UserId};

/// Insert payload for a new order.
///
/// Carries no status on purpose: every new order starts `Pending`, and the
/// type gives callers no way to say otherwise.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// The ordering customer.
    pub customer_id: UserId,
    /// Restaurant the order is placed with.
    pub restaurant: RestaurantRef,
    /// Already-persisted line items, in checkout order.
    pub items: Vec<OrderItem>,
    /// Computed total.
    pub total: Money,
}

/// Insert payload for a new order line item.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    /// The dish being ordered.
    pub dish_id: DishId,
    /// Snapshot of the customer's selections.
    pub options: Vec<OrderItemOption>,
}

impl From<ResolvedItem> for NewOrderItem {
    fn from(item: ResolvedItem) -> Self {
        Self {
            dish_id: item.dish_id,
            options: item.options,
        }
    }
}

/// Gateway trait for Order persistence.
///
/// This is a domain interface (port) implemented by infrastructure
/// adapters. Absence is `Ok(None)` or an empty collection, never an error;
/// errors mean the storage backend itself failed.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, GatewayError>;

    /// Persist a new line item and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn insert_order_item(&self, item: NewOrderItem) -> Result<OrderItem, GatewayError>;

    /// Persist the current state of an existing order.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails or the order does not exist.
    async fn update_order(&self, order: &Order) -> Result<(), GatewayError>;

    /// Find an order by id.
    ///
    /// # Errors
    ///
    /// Returns error if the storage backend fails.
    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, GatewayError>;

    /// All orders placed by a customer, optionally narrowed by status.
    ///
    /// # Errors
    ///
    /// Returns error if the storage backend fails.
    async fn find_by_customer(
        &self,
        customer_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, GatewayError>;

    /// All orders assigned to a driver, optionally narrowed by status.
    ///
    /// # Errors
    ///
    /// Returns error if the storage backend fails.
    async fn find_by_driver(
        &self,
        driver_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, GatewayError>;

    /// The union of orders across every restaurant the owner runs,
    /// optionally narrowed by status.
    ///
    /// # Errors
    ///
    /// Returns error if the storage backend fails.
    async fn find_by_owner(
        &self,
        owner_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, GatewayError>;

    /// Count orders placed with restaurants in the given category.
    ///
    /// # Errors
    ///
    /// Returns error if the storage backend fails.
    async fn count_by_category(&self, category_name: &str) -> Result<u64, GatewayError>;
}
