//! Ordering errors.

use std::fmt;

use super::value_objects::OrderStatus;
use crate::domain::identity::Role;
use crate::domain::shared::{DishId, GatewayError, OrderId, RestaurantId, UserId};

/// Errors that can occur inside a lifecycle operation.
///
/// These never cross the service boundary as-is; the service folds them into
/// `{ok: false, error}` envelopes. [`OrderError::public_reason`] carries the
/// string a caller is allowed to see, `None` meaning the operation's generic
/// fallback applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Referenced restaurant does not exist.
    RestaurantNotFound {
        /// Requested restaurant.
        restaurant_id: RestaurantId,
    },

    /// A line item references a dish that does not exist.
    DishNotFound {
        /// Requested dish.
        dish_id: DishId,
    },

    /// Referenced order does not exist.
    OrderNotFound {
        /// Requested order.
        order_id: OrderId,
    },

    /// The actor may not see this order.
    NotVisible {
        /// Requested order.
        order_id: OrderId,
        /// Denied actor.
        actor_id: UserId,
    },

    /// The actor may not move the order to the requested status.
    EditNotPermitted {
        /// Requested order.
        order_id: OrderId,
        /// Denied actor's role.
        role: Role,
        /// Status the actor asked for.
        requested: OrderStatus,
    },

    /// A driver is already assigned to the order.
    DriverAlreadyAssigned {
        /// Requested order.
        order_id: OrderId,
    },

    /// The persistence gateway failed.
    Gateway(GatewayError),
}

impl OrderError {
    /// The user-visible reason, if this failure has a specific one.
    ///
    /// Gateway failures return `None`; each operation substitutes its own
    /// generic fallback so storage details never leak to callers.
    #[must_use]
    pub const fn public_reason(&self) -> Option<&'static str> {
        match self {
            Self::RestaurantNotFound { .. } => Some("Restaurant not found"),
            Self::DishNotFound { .. } => Some("Dish not found"),
            Self::OrderNotFound { .. } => Some("Order not found"),
            Self::NotVisible { .. } => Some("Can't see this"),
            Self::EditNotPermitted { .. } => Some("You can't do that."),
            Self::DriverAlreadyAssigned { .. } => Some("This order already has a driver"),
            Self::Gateway(_) => None,
        }
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RestaurantNotFound { restaurant_id } => {
                write!(f, "restaurant {restaurant_id} not found")
            }
            Self::DishNotFound { dish_id } => {
                write!(f, "dish {dish_id} not found")
            }
            Self::OrderNotFound { order_id } => {
                write!(f, "order {order_id} not found")
            }
            Self::NotVisible { order_id, actor_id } => {
                write!(f, "order {order_id} is not visible to user {actor_id}")
            }
            Self::EditNotPermitted {
                order_id,
                role,
                requested,
            } => {
                write!(
                    f,
                    "{role} may not move order {order_id} to {requested}"
                )
            }
            Self::DriverAlreadyAssigned { order_id } => {
                write!(f, "order {order_id} already has a driver")
            }
            Self::Gateway(err) => write!(f, "gateway failure: {err}"),
        }
    }
}

impl std::error::Error for OrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GatewayError> for OrderError {
    fn from(err: GatewayError) -> Self {
        Self::Gateway(err)
    }
}
