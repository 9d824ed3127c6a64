//! Ordering Bounded Context
//!
//! The order lifecycle: pricing at checkout, the status machine from
//! `Pending` to `Delivered`, and the authorization policy deciding who may
//! see and move each order.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: the root entity; created once, mutated only
//!   through the lifecycle service
//! - **Pricing Resolver**: dish base price plus matched option surcharges
//! - **Order Policy**: visibility and edit eligibility per role

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{Order, ReconstitutedOrderParams, RestaurantRef};
pub use errors::OrderError;
pub use repository::{NewOrder, NewOrderItem, OrderRepository};
pub use services::{OrderItemRequest, OrderPolicy, PricedOrder, PricingResolver, ResolvedItem};
pub use value_objects::{OrderItem, OrderItemOption, OrderStatus};
