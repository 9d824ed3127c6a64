//! Order Aggregate Root
//!
//! The Order aggregate tracks one order from checkout to delivery. It is
//! created only through the lifecycle service's create operation and mutated
//! only through the edit/take operations; nothing outside the service
//! assigns its fields directly.

use serde::{Deserialize, Serialize};

use super::super::errors::OrderError;
use super::super::value_objects::{OrderItem, OrderStatus};
use crate::domain::shared::{Money, OrderId, RestaurantId, Timestamp, UserId};

/// Denormalized reference to the restaurant an order was placed with.
///
/// `owner_id` is a copy of the restaurant's owner identity, kept in sync by
/// the persistence layer so authorization checks never load the full
/// restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRef {
    /// The restaurant's id.
    pub id: RestaurantId,
    /// Identity of the Owner actor managing this restaurant.
    pub owner_id: UserId,
}

/// Parameters for reconstituting an Order from storage.
///
/// Used by gateway adapters to rebuild aggregates from persisted state.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Order identifier.
    pub id: OrderId,
    /// Ordering customer, absent if the account was removed.
    pub customer_id: Option<UserId>,
    /// Assigned driver, absent until a Delivery actor takes the order.
    pub driver_id: Option<UserId>,
    /// Restaurant the order was placed with.
    pub restaurant: RestaurantRef,
    /// Line items in checkout order.
    pub items: Vec<OrderItem>,
    /// Computed total, absent until priced.
    pub total: Option<Money>,
    /// Current status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Last update timestamp.
    pub updated_at: Timestamp,
}

/// Order Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: Option<UserId>,
    driver_id: Option<UserId>,
    restaurant: RestaurantRef,
    items: Vec<OrderItem>,
    total: Option<Money>,
    status: OrderStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Order {
    /// Reconstitute an order from stored state.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            id: params.id,
            customer_id: params.customer_id,
            driver_id: params.driver_id,
            restaurant: params.restaurant,
            items: params.items,
            total: params.total,
            status: params.status,
            created_at: params.created_at,
            updated_at: params.updated_at,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order ID.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Get the ordering customer's identity, if the account still exists.
    #[must_use]
    pub const fn customer_id(&self) -> Option<UserId> {
        self.customer_id
    }

    /// Get the assigned driver's identity, if one took the order.
    #[must_use]
    pub const fn driver_id(&self) -> Option<UserId> {
        self.driver_id
    }

    /// Get the restaurant reference.
    #[must_use]
    pub const fn restaurant(&self) -> RestaurantRef {
        self.restaurant
    }

    /// Get the line items.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Get the computed total.
    #[must_use]
    pub const fn total(&self) -> Option<Money> {
        self.total
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Move the order to a new status.
    ///
    /// Whether the caller is allowed to request this status is the
    /// authorization policy's decision, made before this method is reached;
    /// the aggregate applies the change as-is.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Timestamp::now();
    }

    /// Assign a driver to the order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::DriverAlreadyAssigned`] if a driver already
    /// took this order.
    pub fn assign_driver(&mut self, driver_id: UserId) -> Result<(), OrderError> {
        if self.driver_id.is_some() {
            return Err(OrderError::DriverAlreadyAssigned { order_id: self.id });
        }
        self.driver_id = Some(driver_id);
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
