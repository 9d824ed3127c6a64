//! Authenticated principals.

use serde::{Deserialize, Serialize};

use super::Role;
use crate::domain::shared::UserId;

/// An authenticated principal with exactly one role.
///
/// Immutable once loaded for the duration of a request. Account management
/// (registration, verification, profile) lives outside this core; the
/// engine only ever sees the id/role pair the transport layer resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The principal's user id.
    pub id: UserId,
    /// The principal's single role.
    pub role: Role,
}

impl Actor {
    /// Create a new actor.
    #[must_use]
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}
