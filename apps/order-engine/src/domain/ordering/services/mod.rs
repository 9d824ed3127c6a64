//! Domain services of the ordering context.

mod policy;
mod pricing;

pub use policy::OrderPolicy;
pub use pricing::{OrderItemRequest, PricedOrder, PricingResolver, ResolvedItem};
