//! Order Lifecycle Service
//!
//! Orchestrates pricing, authorization, persistence and event publication
//! for the five lifecycle operations, and exposes the three subscription
//! streams. Every operation folds its outcome into the `{ok, error?}`
//! envelope; no error value crosses this boundary.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::{Stream, StreamExt};

use crate::application::dto::{
    CreateOrderInput, CreateOrderOutput, EditOrderInput, EditOrderOutput, GetOrderInput,
    GetOrderOutput, GetOrdersInput, GetOrdersOutput, OrderUpdatesInput, TakeOrderInput,
    TakeOrderOutput,
};
use crate::domain::catalog::{CatalogRepository, Dish};
use crate::domain::identity::{Actor, RequiredRoles, Role};
use crate::domain::ordering::{
    NewOrder, NewOrderItem, Order, OrderError, OrderPolicy, OrderRepository, OrderStatus,
    PricingResolver, RestaurantRef,
};
use crate::domain::shared::DishId;
use crate::infrastructure::events::SharedOrderEventHub;

/// Stream handle yielded to subscribers.
///
/// Open until dropped; never replays events published before subscription.
pub type OrderStream = Pin<Box<dyn Stream<Item = Order> + Send>>;

/// Denial returned when a subscription's role gate rejects the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Not authorized")]
pub struct SubscriptionDenied;

/// Envelope string for a failed role gate.
const NOT_AUTHORIZED: &str = "Not authorized";

// Operation role gates.
const CREATE_ORDER_GATE: RequiredRoles = RequiredRoles::Only(&[Role::Client]);
const GET_ORDERS_GATE: RequiredRoles = RequiredRoles::Any;
const GET_ORDER_GATE: RequiredRoles = RequiredRoles::Any;
const EDIT_ORDER_GATE: RequiredRoles = RequiredRoles::Any;
const TAKE_ORDER_GATE: RequiredRoles = RequiredRoles::Only(&[Role::Delivery]);
const PENDING_ORDERS_GATE: RequiredRoles = RequiredRoles::Only(&[Role::Owner]);
const COOKED_ORDERS_GATE: RequiredRoles = RequiredRoles::Only(&[Role::Delivery]);
const ORDER_UPDATES_GATE: RequiredRoles = RequiredRoles::Any;

/// The order lifecycle engine.
///
/// Stateless beyond its injected collaborators; all methods take `&self`
/// and are safe to call concurrently. The event hub lives as long as the
/// process and is shared with whoever serves the subscription streams.
pub struct OrderService<C, R>
where
    C: CatalogRepository,
    R: OrderRepository,
{
    catalog: Arc<C>,
    orders: Arc<R>,
    events: SharedOrderEventHub,
}

impl<C, R> OrderService<C, R>
where
    C: CatalogRepository,
    R: OrderRepository,
{
    /// Create a new service around the given collaborators.
    pub const fn new(catalog: Arc<C>, orders: Arc<R>, events: SharedOrderEventHub) -> Self {
        Self {
            catalog,
            orders,
            events,
        }
    }

    // =========================================================================
    // Lifecycle Operations
    // =========================================================================

    /// Place a new order. Client only.
    pub async fn create_order(
        &self,
        actor: Option<&Actor>,
        input: CreateOrderInput,
    ) -> CreateOrderOutput {
        let Some(customer) = admit(CREATE_ORDER_GATE, actor) else {
            return CreateOrderOutput::failure(NOT_AUTHORIZED);
        };

        match self.try_create_order(customer, input).await {
            Ok(()) => CreateOrderOutput::success(),
            Err(err) => CreateOrderOutput::failure(envelope_reason(
                "create_order",
                "Could not create order",
                &err,
            )),
        }
    }

    /// List the caller's orders, scoped by role.
    pub async fn get_orders(
        &self,
        actor: Option<&Actor>,
        input: GetOrdersInput,
    ) -> GetOrdersOutput {
        let Some(actor) = admit(GET_ORDERS_GATE, actor) else {
            return GetOrdersOutput::failure(NOT_AUTHORIZED);
        };

        match self.try_get_orders(actor, input).await {
            Ok(orders) => GetOrdersOutput::success(orders),
            Err(err) => GetOrdersOutput::failure(envelope_reason(
                "get_orders",
                "Could not get orders",
                &err,
            )),
        }
    }

    /// Fetch a single order the caller is allowed to see.
    pub async fn get_order(&self, actor: Option<&Actor>, input: GetOrderInput) -> GetOrderOutput {
        let Some(actor) = admit(GET_ORDER_GATE, actor) else {
            return GetOrderOutput::failure(NOT_AUTHORIZED);
        };

        match self.try_get_order(actor, input).await {
            Ok(order) => GetOrderOutput::success(order),
            Err(err) => {
                GetOrderOutput::failure(envelope_reason("get_order", "Could not get order", &err))
            }
        }
    }

    /// Move an order to a new status, when the caller's role allows it.
    pub async fn edit_order(
        &self,
        actor: Option<&Actor>,
        input: EditOrderInput,
    ) -> EditOrderOutput {
        let Some(actor) = admit(EDIT_ORDER_GATE, actor) else {
            return EditOrderOutput::failure(NOT_AUTHORIZED);
        };

        match self.try_edit_order(actor, input).await {
            Ok(()) => EditOrderOutput::success(),
            Err(err) => EditOrderOutput::failure(envelope_reason(
                "edit_order",
                "Could not edit order",
                &err,
            )),
        }
    }

    /// Claim an unassigned order for delivery. Delivery only.
    pub async fn take_order(
        &self,
        actor: Option<&Actor>,
        input: TakeOrderInput,
    ) -> TakeOrderOutput {
        let Some(driver) = admit(TAKE_ORDER_GATE, actor) else {
            return TakeOrderOutput::failure(NOT_AUTHORIZED);
        };

        match self.try_take_order(driver, input).await {
            Ok(()) => TakeOrderOutput::success(),
            Err(err) => TakeOrderOutput::failure(envelope_reason(
                "take_order",
                "Could not update order.",
                &err,
            )),
        }
    }

    // =========================================================================
    // Subscription Streams
    // =========================================================================

    /// Stream of new orders placed with the caller's restaurants. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionDenied`] when the caller is not an Owner.
    pub fn pending_orders(&self, actor: Option<&Actor>) -> Result<OrderStream, SubscriptionDenied> {
        let Some(owner) = admit(PENDING_ORDERS_GATE, actor) else {
            return Err(SubscriptionDenied);
        };

        let consumer_id = uuid::Uuid::new_v4().as_u64_pair().0;
        let owner_id = owner.id;
        tracing::debug!(consumer_id, owner_id = %owner_id, "Pending order subscription opened");

        let stream =
            BroadcastStream::new(self.events.pending_orders_rx()).filter_map(move |event| {
                match event {
                    Ok(broadcast) if broadcast.owner_id == owner_id => Some(broadcast.order),
                    Ok(_) => None,
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        tracing::warn!(consumer_id, skipped, "Pending order receiver lagged");
                        None
                    }
                }
            });

        Ok(Box::pin(stream))
    }

    /// Stream of every order that finishes cooking. Delivery only.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionDenied`] when the caller is not a Delivery
    /// driver.
    pub fn cooked_orders(&self, actor: Option<&Actor>) -> Result<OrderStream, SubscriptionDenied> {
        if admit(COOKED_ORDERS_GATE, actor).is_none() {
            return Err(SubscriptionDenied);
        }

        let consumer_id = uuid::Uuid::new_v4().as_u64_pair().0;
        tracing::debug!(consumer_id, "Cooked order subscription opened");

        let stream =
            BroadcastStream::new(self.events.cooked_orders_rx()).filter_map(move |event| {
                match event {
                    Ok(broadcast) => Some(broadcast.order),
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        tracing::warn!(consumer_id, skipped, "Cooked order receiver lagged");
                        None
                    }
                }
            });

        Ok(Box::pin(stream))
    }

    /// Stream of updates to one order the caller is party to. Any role.
    ///
    /// The filter matches the caller's identity against the order's
    /// customer, driver and restaurant owner alike, so a Client watching as
    /// the order's owner-side party would still receive updates. Wider than
    /// plain visibility on purpose.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionDenied`] when the caller is unauthenticated.
    pub fn order_updates(
        &self,
        actor: Option<&Actor>,
        input: OrderUpdatesInput,
    ) -> Result<OrderStream, SubscriptionDenied> {
        let Some(user) = admit(ORDER_UPDATES_GATE, actor) else {
            return Err(SubscriptionDenied);
        };

        let consumer_id = uuid::Uuid::new_v4().as_u64_pair().0;
        let user_id = user.id;
        let order_id = input.id;
        tracing::debug!(consumer_id, order_id = %order_id, "Order update subscription opened");

        let stream =
            BroadcastStream::new(self.events.order_updates_rx()).filter_map(move |event| {
                match event {
                    Ok(broadcast)
                        if broadcast.order.id() == order_id
                            && OrderPolicy::is_party(&broadcast.order, user_id) =>
                    {
                        Some(broadcast.order)
                    }
                    Ok(_) => None,
                    Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                        tracing::warn!(consumer_id, skipped, "Order update receiver lagged");
                        None
                    }
                }
            });

        Ok(Box::pin(stream))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn try_create_order(
        &self,
        customer: Actor,
        input: CreateOrderInput,
    ) -> Result<(), OrderError> {
        let restaurant = self
            .catalog
            .find_restaurant(input.restaurant_id)
            .await?
            .ok_or(OrderError::RestaurantNotFound {
                restaurant_id: input.restaurant_id,
            })?;

        // Resolve every dish up front: pricing is all-or-nothing, and no
        // line item may be written before the whole order is known good.
        let mut dishes: HashMap<DishId, Dish> = HashMap::new();
        for item in &input.items {
            if dishes.contains_key(&item.dish_id) {
                continue;
            }
            let dish = self
                .catalog
                .find_dish(item.dish_id)
                .await?
                .ok_or(OrderError::DishNotFound {
                    dish_id: item.dish_id,
                })?;
            dishes.insert(item.dish_id, dish);
        }

        let priced = PricingResolver::compute_total(&input.items, |id| dishes.get(&id))?;

        let mut items = Vec::with_capacity(priced.items.len());
        for resolved in priced.items {
            let item = self
                .orders
                .insert_order_item(NewOrderItem::from(resolved))
                .await?;
            items.push(item);
        }

        let order = self
            .orders
            .insert_order(NewOrder {
                customer_id: customer.id,
                restaurant: RestaurantRef {
                    id: restaurant.id,
                    owner_id: restaurant.owner_id,
                },
                items,
                total: priced.total,
            })
            .await?;

        tracing::info!(order_id = %order.id(), total = %priced.total, "Order created");

        if self
            .events
            .publish_pending_order(order, restaurant.owner_id)
            .is_none()
        {
            tracing::debug!("No pending order subscribers");
        }

        Ok(())
    }

    async fn try_get_orders(
        &self,
        actor: Actor,
        input: GetOrdersInput,
    ) -> Result<Vec<Order>, OrderError> {
        let orders = match actor.role {
            Role::Client => self.orders.find_by_customer(actor.id, input.status).await?,
            Role::Delivery => self.orders.find_by_driver(actor.id, input.status).await?,
            Role::Owner => self.orders.find_by_owner(actor.id, input.status).await?,
        };
        Ok(orders)
    }

    async fn try_get_order(&self, actor: Actor, input: GetOrderInput) -> Result<Order, OrderError> {
        let order = self
            .orders
            .find_order(input.id)
            .await?
            .ok_or(OrderError::OrderNotFound { order_id: input.id })?;

        OrderPolicy::authorize_view(&actor, &order)?;
        Ok(order)
    }

    async fn try_edit_order(&self, actor: Actor, input: EditOrderInput) -> Result<(), OrderError> {
        let mut order = self
            .orders
            .find_order(input.id)
            .await?
            .ok_or(OrderError::OrderNotFound { order_id: input.id })?;

        OrderPolicy::authorize_edit(&actor, &order, input.status)?;

        order.set_status(input.status);
        self.orders.update_order(&order).await?;

        let order_id = order.id();
        tracing::info!(order_id = %order_id, status = %order.status(), "Order status changed");

        // Cooked orders go out to browsing drivers before the targeted
        // update event; both are best-effort and never roll back the
        // committed status change.
        if actor.role == Role::Owner
            && input.status == OrderStatus::Cooked
            && self.events.publish_cooked_order(order.clone()).is_none()
        {
            tracing::debug!(order_id = %order_id, "No cooked order subscribers");
        }

        if self.events.publish_order_update(order).is_none() {
            tracing::debug!(order_id = %order_id, "No order update subscribers");
        }

        Ok(())
    }

    async fn try_take_order(&self, driver: Actor, input: TakeOrderInput) -> Result<(), OrderError> {
        let mut order = self
            .orders
            .find_order(input.id)
            .await?
            .ok_or(OrderError::OrderNotFound { order_id: input.id })?;

        // No visibility check: the order has no driver yet, the first
        // Delivery caller wins.
        order.assign_driver(driver.id)?;
        self.orders.update_order(&order).await?;

        let order_id = order.id();
        tracing::info!(order_id = %order_id, driver_id = %driver.id, "Order taken");

        if self.events.publish_order_update(order).is_none() {
            tracing::debug!(order_id = %order_id, "No order update subscribers");
        }

        Ok(())
    }
}

/// Evaluate an operation gate, yielding the admitted actor.
fn admit(gate: RequiredRoles, actor: Option<&Actor>) -> Option<Actor> {
    if gate.admits(actor) {
        actor.copied()
    } else {
        None
    }
}

/// Map a lifecycle error to its envelope string.
///
/// Errors with a public reason are policy refusals and are logged at debug;
/// the rest are storage failures, logged at error and masked behind the
/// operation's generic fallback string.
fn envelope_reason(
    operation: &'static str,
    fallback: &'static str,
    err: &OrderError,
) -> &'static str {
    match err.public_reason() {
        Some(reason) => {
            tracing::debug!(operation, reason, "Request refused");
            reason
        }
        None => {
            tracing::error!(operation, error = %err, "Operation failed");
            fallback
        }
    }
}
