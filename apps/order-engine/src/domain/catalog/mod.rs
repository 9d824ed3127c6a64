//! Catalog Bounded Context
//!
//! Restaurants and dishes as read by the ordering engine: the authoritative
//! price data the Pricing Resolver works from, and the owner identities the
//! authorization policy checks against.

mod entities;
mod repository;

pub use entities::{Dish, DishOption, DishOptionChoice, Restaurant};
pub use repository::CatalogRepository;
