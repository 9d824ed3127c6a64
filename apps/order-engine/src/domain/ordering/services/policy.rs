//! Authorization Policy Service
//!
//! Pure decision functions over actors and orders: who may see an order,
//! and who may move it to which status. The operation-level role gates live
//! with the identity context; these checks are the order-specific half.

use crate::domain::identity::{Actor, Role};
use crate::domain::ordering::aggregate::Order;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::shared::UserId;

/// Order-level authorization policy.
///
/// Denials never reveal which rule failed; callers get the same generic
/// outcome whether the role was wrong or the target status was.
pub struct OrderPolicy;

impl OrderPolicy {
    /// Whether the actor may see this order at all.
    ///
    /// Each role is matched strictly against its own identity field: a
    /// Client must be the customer, a Delivery actor the assigned driver,
    /// an Owner the owner of the order's restaurant.
    #[must_use]
    pub fn can_see(actor: &Actor, order: &Order) -> bool {
        match actor.role {
            Role::Client => order.customer_id() == Some(actor.id),
            Role::Delivery => order.driver_id() == Some(actor.id),
            Role::Owner => order.restaurant().owner_id == actor.id,
        }
    }

    /// Visibility check as a lifecycle guard.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotVisible`] if the actor may not see the
    /// order.
    pub fn authorize_view(actor: &Actor, order: &Order) -> Result<(), OrderError> {
        if Self::can_see(actor, order) {
            Ok(())
        } else {
            Err(OrderError::NotVisible {
                order_id: order.id(),
                actor_id: actor.id,
            })
        }
    }

    /// Whether a role may request this target status.
    ///
    /// Owners cook, drivers deliver, clients only watch. The table is keyed
    /// on the requested status alone: how the order got to its current
    /// status is deliberately not consulted, so an Owner may for instance
    /// re-request `Cooking` or move straight to `Cooked`.
    #[must_use]
    pub const fn can_edit_status(role: Role, requested: OrderStatus) -> bool {
        match role {
            Role::Client => false,
            Role::Owner => matches!(requested, OrderStatus::Cooking | OrderStatus::Cooked),
            Role::Delivery => matches!(requested, OrderStatus::PickedUp | OrderStatus::Delivered),
        }
    }

    /// Full edit guard: visibility first, then edit eligibility.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotVisible`] if the actor may not see the
    /// order, [`OrderError::EditNotPermitted`] if the actor may see it but
    /// not move it to the requested status.
    pub fn authorize_edit(
        actor: &Actor,
        order: &Order,
        requested: OrderStatus,
    ) -> Result<(), OrderError> {
        Self::authorize_view(actor, order)?;

        if Self::can_edit_status(actor.role, requested) {
            Ok(())
        } else {
            Err(OrderError::EditNotPermitted {
                order_id: order.id(),
                role: actor.role,
                requested,
            })
        }
    }

    /// Whether a user is party to an order under any hat.
    ///
    /// Matches the identity against customer, driver and restaurant owner
    /// alike, regardless of the user's role. Wider than [`Self::can_see`];
    /// used by the order-update stream filter.
    #[must_use]
    pub fn is_party(order: &Order, user_id: UserId) -> bool {
        order.driver_id() == Some(user_id)
            || order.customer_id() == Some(user_id)
            || order.restaurant().owner_id == user_id
    }
}
