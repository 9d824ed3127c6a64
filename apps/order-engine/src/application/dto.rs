//! Operation Inputs and Outputs
//!
//! Request/response pairs for the lifecycle operations. Every output follows
//! the `{ok, error?, data?}` envelope shape: failures are carried as
//! user-visible strings, never as error values.

use serde::{Deserialize, Serialize};

use crate::domain::ordering::{Order, OrderItemRequest, OrderStatus};
use crate::domain::shared::{OrderId, RestaurantId};

// =============================================================================
// Inputs
// =============================================================================

/// Input for `create_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderInput {
    /// Restaurant the order is placed with.
    pub restaurant_id: RestaurantId,
    /// Requested line items.
    pub items: Vec<OrderItemRequest>,
}

/// Input for `get_orders`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GetOrdersInput {
    /// Narrow the result to a single status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Input for `get_order`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetOrderInput {
    /// Order to fetch.
    pub id: OrderId,
}

/// Input for `edit_order`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EditOrderInput {
    /// Order to edit.
    pub id: OrderId,
    /// Requested target status.
    pub status: OrderStatus,
}

/// Input for `take_order`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TakeOrderInput {
    /// Order to take.
    pub id: OrderId,
}

/// Input for the `order_updates` subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderUpdatesInput {
    /// Order to watch.
    pub id: OrderId,
}

// =============================================================================
// Outputs
// =============================================================================

/// Output of `create_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderOutput {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure reason when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateOrderOutput {
    /// Successful envelope.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// Failed envelope with a user-visible reason.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Output of `get_orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrdersOutput {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure reason when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The matching orders when `ok` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
}

impl GetOrdersOutput {
    /// Successful envelope carrying the matching orders.
    #[must_use]
    pub const fn success(orders: Vec<Order>) -> Self {
        Self {
            ok: true,
            error: None,
            orders: Some(orders),
        }
    }

    /// Failed envelope with a user-visible reason.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            orders: None,
        }
    }
}

/// Output of `get_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrderOutput {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure reason when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The order when `ok` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl GetOrderOutput {
    /// Successful envelope carrying the order.
    #[must_use]
    pub const fn success(order: Order) -> Self {
        Self {
            ok: true,
            error: None,
            order: Some(order),
        }
    }

    /// Failed envelope with a user-visible reason.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            order: None,
        }
    }
}

/// Output of `edit_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditOrderOutput {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure reason when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EditOrderOutput {
    /// Successful envelope.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// Failed envelope with a user-visible reason.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Output of `take_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeOrderOutput {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure reason when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TakeOrderOutput {
    /// Successful envelope.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// Failed envelope with a user-visible reason.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}
