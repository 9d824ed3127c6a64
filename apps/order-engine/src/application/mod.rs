//! Application Layer - Lifecycle operations behind the envelope contract.
//!
//! The [`OrderService`] is the single entry point for transports: five
//! request/response operations plus three subscription streams. Inputs and
//! outputs live in [`dto`].

/// Operation inputs and envelope outputs.
pub mod dto;

/// The order lifecycle service.
pub mod service;

pub use dto::{
    CreateOrderInput, CreateOrderOutput, EditOrderInput, EditOrderOutput, GetOrderInput,
    GetOrderOutput, GetOrdersInput, GetOrdersOutput, OrderUpdatesInput, TakeOrderInput,
    TakeOrderOutput,
};
pub use service::{OrderService, OrderStream, SubscriptionDenied};
