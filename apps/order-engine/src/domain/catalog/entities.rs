//! Restaurants and dishes as the ordering engine sees them.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DishId, Money, RestaurantId, UserId};

/// A restaurant referenced by orders.
///
/// Menu management (creating and editing restaurants and dishes) lives
/// outside this core; the engine only reads what the catalog gateway
/// returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// The restaurant's id.
    pub id: RestaurantId,
    /// Display name.
    pub name: String,
    /// Name of the category the restaurant is listed under.
    pub category_name: String,
    /// Identity of the Owner actor authorized to manage this restaurant's
    /// orders.
    pub owner_id: UserId,
}

/// A choice within a dish option, optionally carrying its own surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishOptionChoice {
    /// Choice name, matched against the customer's selection.
    pub name: String,
    /// Surcharge added when this choice is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Money>,
}

/// A configurable option on a dish.
///
/// An option carries a surcharge either directly (`extra`) or through its
/// choices; both may be absent for a free option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishOption {
    /// Option name, matched against the customer's selection.
    pub name: String,
    /// Flat surcharge added when this option is selected at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Money>,
    /// Named choices, each optionally carrying a surcharge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<DishOptionChoice>>,
}

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// The dish's id.
    pub id: DishId,
    /// The restaurant this dish belongs to.
    pub restaurant_id: RestaurantId,
    /// Display name.
    pub name: String,
    /// Base price before option surcharges.
    pub price: Money,
    /// Menu description.
    pub description: String,
    /// Photo URL, if one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Configurable options, in menu order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DishOption>>,
}

impl Dish {
    /// Find an option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&DishOption> {
        self.options
            .as_deref()
            .and_then(|options| options.iter().find(|option| option.name == name))
    }
}

impl DishOption {
    /// Find a choice by name.
    #[must_use]
    pub fn choice(&self, name: &str) -> Option<&DishOptionChoice> {
        self.choices
            .as_deref()
            .and_then(|choices| choices.iter().find(|choice| choice.name == name))
    }
}
