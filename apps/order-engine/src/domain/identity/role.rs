//! User roles and operation role gates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Actor;

/// The role a user account holds.
///
/// Every authenticated principal carries exactly one role. Policy sites
/// match exhaustively over this enum so a new role cannot silently default
/// to "allowed" anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Places orders and follows their progress.
    Client,
    /// Runs one or more restaurants and cooks their orders.
    Owner,
    /// Picks up cooked orders and delivers them.
    Delivery,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "Client"),
            Self::Owner => write!(f, "Owner"),
            Self::Delivery => write!(f, "Delivery"),
        }
    }
}

/// Required-role set declared by a lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRoles {
    /// Any authenticated role suffices.
    Any,
    /// Only the listed roles are admitted.
    Only(&'static [Role]),
}

impl RequiredRoles {
    /// Returns true if the given role satisfies this gate.
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        match self {
            Self::Any => true,
            Self::Only(roles) => roles.contains(&role),
        }
    }

    /// Apply the gate to an optionally-authenticated caller.
    ///
    /// An unauthenticated caller is always denied, `Any` included.
    #[must_use]
    pub fn admits(&self, actor: Option<&Actor>) -> bool {
        match actor {
            None => false,
            Some(actor) => self.permits(actor.role),
        }
    }
}

impl fmt::Display for RequiredRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Only(roles) => {
                let mut first = true;
                for role in *roles {
                    if !first {
                        write!(f, "|")?;
                    }
                    write!(f, "{role}")?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}
