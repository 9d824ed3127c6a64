//! Order line items and their option selections.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DishId, Money, OrderItemId};

/// An option selection the customer made for one line item.
///
/// These are snapshot copies of what the customer picked at order time, not
/// live references into the dish's option definitions. The dish's menu may
/// change after the order is placed; the order stays priced as-ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemOption {
    /// Name of the dish option this selection refers to.
    pub name: String,
    /// Chosen choice within the option, if the option has choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
    /// Surcharge snapshot taken at selection time, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Money>,
}

impl OrderItemOption {
    /// Selection of a flat option with no choice.
    #[must_use]
    pub fn flat(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: None,
            extra: None,
        }
    }

    /// Selection of a named choice within an option.
    #[must_use]
    pub fn with_choice(name: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: Some(choice.into()),
            extra: None,
        }
    }
}

/// A persisted order line item: one dish plus the customer's selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    dish_id: DishId,
    options: Vec<OrderItemOption>,
}

impl OrderItem {
    /// Reconstitute a line item from persisted state.
    #[must_use]
    pub const fn new(id: OrderItemId, dish_id: DishId, options: Vec<OrderItemOption>) -> Self {
        Self {
            id,
            dish_id,
            options,
        }
    }

    /// The line item's id.
    #[must_use]
    pub const fn id(&self) -> OrderItemId {
        self.id
    }

    /// The referenced dish.
    #[must_use]
    pub const fn dish_id(&self) -> DishId {
        self.dish_id
    }

    /// The customer's option selections.
    #[must_use]
    pub fn options(&self) -> &[OrderItemOption] {
        &self.options
    }
}
