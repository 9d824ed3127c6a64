//! Tracing Setup
//!
//! Configures console logging for the engine via `tracing-subscriber`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Standard filter directives (e.g. `order_engine=debug`)
//!
//! # Usage
//!
//! ```ignore
//! use order_engine::infrastructure::telemetry;
//!
//! // Initialize once at startup
//! telemetry::init();
//!
//! // Add spans to your code
//! #[tracing::instrument]
//! fn process_order() {
//!     tracing::info!("Processing order");
//! }
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive when `RUST_LOG` does not name this crate.
const DEFAULT_DIRECTIVE: &str = "order_engine=info";

/// Initialize console logging.
///
/// Call once at startup, before any spans or events are emitted.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
#[allow(clippy::expect_used)]
pub fn init() {
    let env_filter = EnvFilter::from_default_env().add_directive(
        DEFAULT_DIRECTIVE
            .parse()
            .expect("static directive 'order_engine=info' is valid"),
    );

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
