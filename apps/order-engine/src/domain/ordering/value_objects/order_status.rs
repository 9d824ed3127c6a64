//! Order status in the delivery lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as it moves from checkout to the customer's door.
///
/// The intended progression is
/// `Pending -> Cooking -> Cooked -> PickedUp -> Delivered`.
/// Which actor may request which target status is decided by the
/// authorization policy; the status type itself carries no transition
/// rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order placed, waiting for the restaurant to start cooking.
    Pending,
    /// The restaurant is cooking the order.
    Cooking,
    /// Cooking finished, waiting for a driver to pick it up.
    Cooked,
    /// A driver picked the order up and is on the way.
    PickedUp,
    /// The order reached the customer.
    Delivered,
}

impl OrderStatus {
    /// Returns true if this is the initial status given to every new order.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the order has reached the end of its lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Returns true if the order is still in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Cooking => write!(f, "COOKING"),
            Self::Cooked => write!(f, "COOKED"),
            Self::PickedUp => write!(f, "PICKED_UP"),
            Self::Delivered => write!(f, "DELIVERED"),
        }
    }
}
