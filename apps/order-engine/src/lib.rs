#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Engine - Lifecycle Core
//!
//! The order lifecycle engine for the Carte food-ordering backend. Computes
//! order totals from dish prices and option surcharges, enforces per-role
//! authorization on every operation, drives the order status machine, and
//! fans lifecycle events out to the parties watching each order.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Pure business types and rules
//!   - `shared`: ids, money, timestamps, gateway errors
//!   - `identity`: actors, roles, operation gates
//!   - `catalog`: restaurants, dishes and their options
//!   - `ordering`: the order aggregate, pricing, policy, lifecycle errors
//!
//! - **Application**: The `OrderService` operations and envelope DTOs
//!
//! - **Infrastructure**: Adapters and process concerns
//!   - `events`: broadcast hub behind the three subscription topics
//!   - `persistence`: in-memory gateway implementations
//!   - `config`: environment-driven settings
//!   - `telemetry`: tracing setup
//!
//! # Event Flow
//!
//! ```text
//! create_order ──► pending-order ──► pending_orders (Owner)
//! edit_order   ──► cooked-order  ──► cooked_orders  (Delivery)
//!              └─► order-update ──► order_updates  (parties to the order)
//! take_order   ──► order-update ──┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Business types and rules with no adapter dependencies.
pub mod domain;

/// Application layer - Lifecycle operations and envelope DTOs.
pub mod application;

/// Infrastructure layer - Adapters and process concerns.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Identity
pub use domain::identity::{Actor, RequiredRoles, Role};

// Catalog types
pub use domain::catalog::{CatalogRepository, Dish, DishOption, DishOptionChoice, Restaurant};

// Ordering types
pub use domain::ordering::{
    NewOrder, NewOrderItem, Order, OrderError, OrderItem, OrderItemOption, OrderItemRequest,
    OrderPolicy, OrderRepository, OrderStatus, PricedOrder, PricingResolver,
    ReconstitutedOrderParams, ResolvedItem, RestaurantRef,
};

// Shared value objects
pub use domain::shared::{
    DishId, GatewayError, Money, OrderId, OrderItemId, RestaurantId, Timestamp, UserId,
};

// Lifecycle service and DTOs
pub use application::{
    CreateOrderInput, CreateOrderOutput, EditOrderInput, EditOrderOutput, GetOrderInput,
    GetOrderOutput, GetOrdersInput, GetOrdersOutput, OrderService, OrderStream, OrderUpdatesInput,
    SubscriptionDenied, TakeOrderInput, TakeOrderOutput,
};

// Event hub (for integration tests and transport wiring)
pub use infrastructure::events::{
    EventHubConfig, EventHubStats, OrderEventHub, SharedOrderEventHub,
};

// In-memory store (for tests and local runs)
pub use infrastructure::persistence::InMemoryStore;

// Configuration
pub use infrastructure::config::{ConfigError, EngineConfig, EventBusSettings, load_dotenv};
