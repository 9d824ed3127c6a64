//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementations of the gateway traits
//! defined in the domain layer, plus process-level concerns.

/// Broadcast channel adapters for event distribution.
pub mod events;

/// Configuration loading.
pub mod config;

/// In-memory gateway implementations.
pub mod persistence;

/// Console tracing integration.
pub mod telemetry;
