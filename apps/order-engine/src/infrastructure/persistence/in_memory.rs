//! In-memory catalog and order store.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::catalog::{CatalogRepository, Dish, Restaurant};
use crate::domain::ordering::{
    NewOrder, NewOrderItem, Order, OrderItem, OrderRepository, OrderStatus,
    ReconstitutedOrderParams,
};
use crate::domain::shared::{
    DishId, GatewayError, OrderId, OrderItemId, RestaurantId, Timestamp, UserId,
};

/// In-memory implementation of `CatalogRepository` and `OrderRepository`.
///
/// Suitable for testing and development. Not for production use. Ids are
/// allocated sequentially starting at 1, mirroring an autoincrement column.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    restaurants: RwLock<HashMap<RestaurantId, Restaurant>>,
    dishes: RwLock<HashMap<DishId, Dish>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    order_items: RwLock<HashMap<OrderItemId, OrderItem>>,
    next_order_id: AtomicI64,
    next_order_item_id: AtomicI64,
}

impl InMemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a restaurant to the store (for test setup).
    pub fn seed_restaurant(&self, restaurant: Restaurant) {
        let mut restaurants = self.restaurants.write();
        restaurants.insert(restaurant.id, restaurant);
    }

    /// Add a dish to the store (for test setup).
    pub fn seed_dish(&self, dish: Dish) {
        let mut dishes = self.dishes.write();
        dishes.insert(dish.id, dish);
    }

    /// Get the number of orders in the store.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.read().len()
    }

    /// Clear all data from the store.
    pub fn clear(&self) {
        self.restaurants.write().clear();
        self.dishes.write().clear();
        self.orders.write().clear();
        self.order_items.write().clear();
    }

    fn collect_sorted<F>(&self, predicate: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let orders = self.orders.read();
        let mut matched: Vec<Order> = orders.values().filter(|o| predicate(o)).cloned().collect();
        // HashMap iteration order is arbitrary; sort by id for creation order.
        matched.sort_by_key(|o| o.id().value());
        matched
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn find_restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>, GatewayError> {
        let restaurants = self.restaurants.read();
        Ok(restaurants.get(&id).cloned())
    }

    async fn find_dish(&self, id: DishId) -> Result<Option<Dish>, GatewayError> {
        let dishes = self.dishes.read();
        Ok(dishes.get(&id).cloned())
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, GatewayError> {
        let id = OrderId::new(self.next_order_id.fetch_add(1, Ordering::Relaxed) + 1);
        let now = Timestamp::now();
        let stored = Order::reconstitute(ReconstitutedOrderParams {
            id,
            customer_id: Some(order.customer_id),
            driver_id: None,
            restaurant: order.restaurant,
            items: order.items,
            total: Some(order.total),
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        });

        let mut orders = self.orders.write();
        orders.insert(id, stored.clone());
        Ok(stored)
    }

    async fn insert_order_item(&self, item: NewOrderItem) -> Result<OrderItem, GatewayError> {
        let id = OrderItemId::new(self.next_order_item_id.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = OrderItem::new(id, item.dish_id, item.options);

        let mut order_items = self.order_items.write();
        order_items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_order(&self, order: &Order) -> Result<(), GatewayError> {
        let mut orders = self.orders.write();
        if !orders.contains_key(&order.id()) {
            return Err(GatewayError::Storage {
                message: format!("order {} does not exist", order.id()),
            });
        }
        orders.insert(order.id(), order.clone());
        Ok(())
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, GatewayError> {
        let orders = self.orders.read();
        Ok(orders.get(&id).cloned())
    }

    async fn find_by_customer(
        &self,
        customer_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, GatewayError> {
        Ok(self.collect_sorted(|o| {
            o.customer_id() == Some(customer_id) && status.is_none_or(|s| o.status() == s)
        }))
    }

    async fn find_by_driver(
        &self,
        driver_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, GatewayError> {
        Ok(self.collect_sorted(|o| {
            o.driver_id() == Some(driver_id) && status.is_none_or(|s| o.status() == s)
        }))
    }

    async fn find_by_owner(
        &self,
        owner_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, GatewayError> {
        Ok(self.collect_sorted(|o| {
            o.restaurant().owner_id == owner_id && status.is_none_or(|s| o.status() == s)
        }))
    }

    async fn count_by_category(&self, category_name: &str) -> Result<u64, GatewayError> {
        let in_category: HashSet<RestaurantId> = {
            let restaurants = self.restaurants.read();
            restaurants
                .values()
                .filter(|r| r.category_name == category_name)
                .map(|r| r.id)
                .collect()
        };

        let orders = self.orders.read();
        let count = orders
            .values()
            .filter(|o| in_category.contains(&o.restaurant().id))
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}
