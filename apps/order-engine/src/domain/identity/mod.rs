//! Identity Bounded Context
//!
//! Authenticated principals and the role gates declared by lifecycle
//! operations. Order-specific authorization (visibility, edit eligibility)
//! lives with the ordering context.

mod actor;
mod role;

pub use actor::Actor;
pub use role::{RequiredRoles, Role};
