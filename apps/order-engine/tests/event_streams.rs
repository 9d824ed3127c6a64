//! Subscription Stream Integration Tests
//!
//! Exercises the three subscription streams end to end: role gates, per-actor
//! filtering, fan-out, delivery order and stream termination.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tokio_stream::StreamExt;

use order_engine::{
    Actor, CreateOrderInput, Dish, DishId, EditOrderInput, InMemoryStore, Money, OrderEventHub,
    OrderId, OrderItemRequest, OrderService, OrderStatus, OrderUpdatesInput, Restaurant,
    RestaurantId, Role, SharedOrderEventHub, SubscriptionDenied, TakeOrderInput, UserId,
};

const CLIENT: Actor = Actor::new(UserId::new(1), Role::Client);
const SEOUL_OWNER: Actor = Actor::new(UserId::new(2), Role::Owner);
const DRIVER: Actor = Actor::new(UserId::new(3), Role::Delivery);
const NAPOLI_OWNER: Actor = Actor::new(UserId::new(4), Role::Owner);
const SECOND_DRIVER: Actor = Actor::new(UserId::new(5), Role::Delivery);

const RECV_WAIT: Duration = Duration::from_millis(200);
const QUIET_WAIT: Duration = Duration::from_millis(50);

fn setup() -> (Arc<InMemoryStore>, OrderService<InMemoryStore, InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let hub: SharedOrderEventHub = Arc::new(OrderEventHub::with_defaults());
    let service = OrderService::new(Arc::clone(&store), Arc::clone(&store), hub);

    store.seed_restaurant(Restaurant {
        id: RestaurantId::new(10),
        name: "Seoul Table".to_string(),
        category_name: "korean-bbq".to_string(),
        owner_id: SEOUL_OWNER.id,
    });
    store.seed_dish(Dish {
        id: DishId::new(100),
        restaurant_id: RestaurantId::new(10),
        name: "bibimbap".to_string(),
        price: Money::from_cents(1000),
        description: "rice bowl".to_string(),
        photo: None,
        options: None,
    });
    store.seed_restaurant(Restaurant {
        id: RestaurantId::new(11),
        name: "Napoli".to_string(),
        category_name: "pizza".to_string(),
        owner_id: NAPOLI_OWNER.id,
    });
    store.seed_dish(Dish {
        id: DishId::new(101),
        restaurant_id: RestaurantId::new(11),
        name: "margherita".to_string(),
        price: Money::from_cents(900),
        description: "classic".to_string(),
        photo: None,
        options: None,
    });

    (store, service)
}

async fn place_order(
    service: &OrderService<InMemoryStore, InMemoryStore>,
    restaurant_id: i64,
    dish_id: i64,
) {
    let result = service
        .create_order(
            Some(&CLIENT),
            CreateOrderInput {
                restaurant_id: restaurant_id.into(),
                items: vec![OrderItemRequest {
                    dish_id: dish_id.into(),
                    options: vec![],
                }],
            },
        )
        .await;
    assert!(result.ok, "order placement failed: {:?}", result.error);
}

async fn set_status(
    service: &OrderService<InMemoryStore, InMemoryStore>,
    actor: &Actor,
    order_id: i64,
    status: OrderStatus,
) {
    let result = service
        .edit_order(
            Some(actor),
            EditOrderInput {
                id: order_id.into(),
                status,
            },
        )
        .await;
    assert!(result.ok, "edit failed: {:?}", result.error);
}

// =============================================================================
// Role Gates
// =============================================================================

#[tokio::test]
async fn test_subscription_role_gates() {
    let (_store, service) = setup();

    assert_eq!(
        service.pending_orders(Some(&CLIENT)).err().unwrap(),
        SubscriptionDenied
    );
    assert_eq!(
        service.pending_orders(Some(&DRIVER)).err().unwrap(),
        SubscriptionDenied
    );
    assert!(service.pending_orders(Some(&SEOUL_OWNER)).is_ok());

    assert!(service.cooked_orders(Some(&SEOUL_OWNER)).is_err());
    assert!(service.cooked_orders(Some(&CLIENT)).is_err());
    assert!(service.cooked_orders(Some(&DRIVER)).is_ok());

    // Any authenticated role may watch an order; nobody else may.
    let watch = OrderUpdatesInput {
        id: OrderId::new(1),
    };
    assert!(service.order_updates(Some(&CLIENT), watch).is_ok());
    assert!(service.order_updates(None, watch).is_err());

    let denial = service.pending_orders(None).err().unwrap();
    assert_eq!(denial.to_string(), "Not authorized");
}

// =============================================================================
// Pending Orders
// =============================================================================

#[tokio::test]
async fn test_pending_orders_reach_only_the_restaurants_owner() {
    let (_store, service) = setup();

    let mut seoul = service.pending_orders(Some(&SEOUL_OWNER)).unwrap();
    let mut napoli = service.pending_orders(Some(&NAPOLI_OWNER)).unwrap();

    place_order(&service, 10, 100).await;

    let order = timeout(RECV_WAIT, seoul.next())
        .await
        .expect("seoul owner never notified")
        .unwrap();
    assert_eq!(order.restaurant().id, RestaurantId::new(10));
    assert_eq!(order.status(), OrderStatus::Pending);

    assert!(
        timeout(QUIET_WAIT, napoli.next()).await.is_err(),
        "napoli owner saw a seoul order"
    );
}

#[tokio::test]
async fn test_pending_orders_arrive_in_placement_order() {
    let (_store, service) = setup();
    let mut stream = service.pending_orders(Some(&SEOUL_OWNER)).unwrap();

    for _ in 0..3 {
        place_order(&service, 10, 100).await;
    }

    for expected in 1..=3 {
        let order = timeout(RECV_WAIT, stream.next()).await.unwrap().unwrap();
        assert_eq!(order.id(), OrderId::new(expected));
    }
}

#[tokio::test]
async fn test_streams_never_replay_history() {
    let (_store, service) = setup();

    place_order(&service, 10, 100).await;
    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooking).await;

    // Subscribed after the Cooking update; only later events arrive.
    let mut stream = service
        .order_updates(
            Some(&CLIENT),
            OrderUpdatesInput {
                id: OrderId::new(1),
            },
        )
        .unwrap();

    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooked).await;

    let first = timeout(RECV_WAIT, stream.next()).await.unwrap().unwrap();
    assert_eq!(first.status(), OrderStatus::Cooked);
}

// =============================================================================
// Cooked Orders
// =============================================================================

#[tokio::test]
async fn test_cooked_orders_fan_out_to_every_driver() {
    let (_store, service) = setup();
    place_order(&service, 10, 100).await;

    let mut first = service.cooked_orders(Some(&DRIVER)).unwrap();
    let mut second = service.cooked_orders(Some(&SECOND_DRIVER)).unwrap();

    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooking).await;
    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooked).await;

    for stream in [&mut first, &mut second] {
        let order = timeout(RECV_WAIT, stream.next()).await.unwrap().unwrap();
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.status(), OrderStatus::Cooked);
    }
}

#[tokio::test]
async fn test_cooking_alone_stays_off_the_cooked_stream() {
    let (_store, service) = setup();
    place_order(&service, 10, 100).await;

    let mut stream = service.cooked_orders(Some(&DRIVER)).unwrap();
    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooking).await;

    assert!(
        timeout(QUIET_WAIT, stream.next()).await.is_err(),
        "cooking reached the cooked stream"
    );
}

// =============================================================================
// Order Updates
// =============================================================================

#[tokio::test]
async fn test_order_updates_reach_every_party() {
    let (_store, service) = setup();
    place_order(&service, 10, 100).await;
    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooking).await;
    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooked).await;

    let taken = service
        .take_order(
            Some(&DRIVER),
            TakeOrderInput {
                id: OrderId::new(1),
            },
        )
        .await;
    assert!(taken.ok);

    let watch = OrderUpdatesInput {
        id: OrderId::new(1),
    };
    let mut customer = service.order_updates(Some(&CLIENT), watch).unwrap();
    let mut owner = service.order_updates(Some(&SEOUL_OWNER), watch).unwrap();
    let mut driver = service.order_updates(Some(&DRIVER), watch).unwrap();

    set_status(&service, &DRIVER, 1, OrderStatus::PickedUp).await;

    for stream in [&mut customer, &mut owner, &mut driver] {
        let order = timeout(RECV_WAIT, stream.next()).await.unwrap().unwrap();
        assert_eq!(order.status(), OrderStatus::PickedUp);
        assert_eq!(order.driver_id(), Some(DRIVER.id));
    }
}

#[tokio::test]
async fn test_order_updates_ignore_other_orders() {
    let (_store, service) = setup();
    place_order(&service, 10, 100).await;
    place_order(&service, 11, 101).await;

    let mut stream = service
        .order_updates(
            Some(&CLIENT),
            OrderUpdatesInput {
                id: OrderId::new(2),
            },
        )
        .unwrap();

    set_status(&service, &SEOUL_OWNER, 1, OrderStatus::Cooking).await;
    set_status(&service, &NAPOLI_OWNER, 2, OrderStatus::Cooking).await;

    let order = timeout(RECV_WAIT, stream.next()).await.unwrap().unwrap();
    assert_eq!(order.id(), OrderId::new(2));
}

// =============================================================================
// Stream Termination
// =============================================================================

#[tokio::test]
async fn test_streams_end_when_the_service_is_dropped() {
    let (_store, service) = setup();
    let mut stream = service.pending_orders(Some(&SEOUL_OWNER)).unwrap();

    drop(service);

    assert!(
        timeout(RECV_WAIT, stream.next())
            .await
            .expect("stream did not terminate")
            .is_none()
    );
}
