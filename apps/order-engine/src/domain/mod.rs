//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//! - **Gateway Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`identity`]: Authenticated principals and operation role gates
//! - [`catalog`]: Restaurants and dishes the engine prices against
//! - [`ordering`]: Order lifecycle, pricing, and authorization policy

pub mod catalog;
pub mod identity;
pub mod ordering;
pub mod shared;
