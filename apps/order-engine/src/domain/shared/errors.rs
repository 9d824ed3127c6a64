//! Gateway errors shared across bounded contexts.

use std::fmt;

/// Transport-level failure from a persistence gateway.
///
/// Gateways never fail for "not found"; absence is signalled with `Ok(None)`
/// or an empty collection. An error here means the storage backend itself
/// misbehaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend accepted the request but failed to execute it.
    Storage {
        /// Backend-specific description, for logs only.
        message: String,
    },
    /// The backend could not be reached.
    Unavailable {
        /// Backend-specific description, for logs only.
        message: String,
    },
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage { message } => write!(f, "storage failure: {message}"),
            Self::Unavailable { message } => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl std::error::Error for GatewayError {}
