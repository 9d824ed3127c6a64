//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts. All identifiers are
//! numeric, matching the relational store's primary keys.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the inner numeric value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(UserId, "Unique identifier for a user account.");
define_id!(RestaurantId, "Unique identifier for a restaurant.");
define_id!(DishId, "Unique identifier for a dish on a restaurant's menu.");
define_id!(OrderId, "Unique identifier for an order.");
define_id!(OrderItemId, "Unique identifier for an order line item.");
