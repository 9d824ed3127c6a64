//! Value objects of the ordering context.

mod order_item;
mod order_status;

pub use order_item::{OrderItem, OrderItemOption};
pub use order_status::OrderStatus;
