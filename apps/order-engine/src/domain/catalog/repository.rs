//! Catalog Gateway Trait
//!
//! Read-only persistence abstraction for restaurants and dishes.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::entities::{Dish, Restaurant};
use crate::domain::shared::{DishId, GatewayError, RestaurantId};

/// Gateway trait for catalog lookups.
///
/// This is a domain interface (port) implemented by infrastructure
/// adapters. Absence is `Ok(None)`, never an error.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find a restaurant by id.
    ///
    /// # Errors
    ///
    /// Returns error if the storage backend fails.
    async fn find_restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>, GatewayError>;

    /// Find a dish by id.
    ///
    /// # Errors
    ///
    /// Returns error if the storage backend fails.
    async fn find_dish(&self, id: DishId) -> Result<Option<Dish>, GatewayError>;
}
