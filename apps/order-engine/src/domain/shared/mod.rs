//! Shared Domain Types
//!
//! Value objects and errors shared across bounded contexts.

pub mod errors;
pub mod value_objects;

pub use errors::GatewayError;
pub use value_objects::{DishId, Money, OrderId, OrderItemId, RestaurantId, Timestamp, UserId};
