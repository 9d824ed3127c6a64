//! Configuration Module
//!
//! Configuration loading for the order engine.

mod settings;

pub use settings::{ConfigError, EngineConfig, EventBusSettings, load_dotenv};
