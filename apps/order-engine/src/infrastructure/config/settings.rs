//! Engine Configuration Settings
//!
//! Configuration types for the order engine, loaded from environment variables.

/// Event channel settings.
#[derive(Debug, Clone)]
pub struct EventBusSettings {
    /// Capacity of the pending order broadcast channel.
    pub pending_orders_capacity: usize,
    /// Capacity of the cooked order broadcast channel.
    pub cooked_orders_capacity: usize,
    /// Capacity of the order update broadcast channel.
    pub order_updates_capacity: usize,
}

impl Default for EventBusSettings {
    fn default() -> Self {
        Self {
            pending_orders_capacity: 1_024,
            cooked_orders_capacity: 1_024,
            order_updates_capacity: 4_096,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Event channel settings.
    pub event_bus: EventBusSettings,
}

impl EngineConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a capacity override is present but is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let event_bus = EventBusSettings {
            pending_orders_capacity: parse_env_capacity(
                "ORDER_ENGINE_PENDING_ORDERS_CAPACITY",
                EventBusSettings::default().pending_orders_capacity,
            )?,
            cooked_orders_capacity: parse_env_capacity(
                "ORDER_ENGINE_COOKED_ORDERS_CAPACITY",
                EventBusSettings::default().cooked_orders_capacity,
            )?,
            order_updates_capacity: parse_env_capacity(
                "ORDER_ENGINE_ORDER_UPDATES_CAPACITY",
                EventBusSettings::default().order_updates_capacity,
            )?,
        };

        Ok(Self { event_bus })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable is set but is not a positive integer.
    #[error("environment variable {0} must be a positive integer")]
    InvalidCapacity(String),
}

/// Load a `.env` file from the current directory or any ancestor directory.
///
/// A missing file is not an error; the engine runs on the process
/// environment alone.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

// Capacities feed tokio broadcast channels, which require a non-zero
// capacity, so zero is rejected rather than defaulted.
fn parse_env_capacity(key: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => match raw.parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ConfigError::InvalidCapacity(key.to_string())),
        },
    }
}
