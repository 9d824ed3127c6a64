//! Pricing Resolver Service
//!
//! Computes an order's total from dish base prices and option surcharges.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Dish;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::value_objects::OrderItemOption;
use crate::domain::shared::{DishId, Money};

/// One requested line item, as supplied by the customer at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    /// The dish being ordered.
    pub dish_id: DishId,
    /// The customer's option selections.
    #[serde(default)]
    pub options: Vec<OrderItemOption>,
}

/// A line item after price resolution, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    /// The dish being ordered.
    pub dish_id: DishId,
    /// Snapshot of the customer's selections.
    pub options: Vec<OrderItemOption>,
}

/// Result of pricing a set of requested items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOrder {
    /// Sum of per-item prices.
    pub total: Money,
    /// Resolved items in request order.
    pub items: Vec<ResolvedItem>,
}

/// Pricing Resolver for order totals.
///
/// Deterministic for a given dish snapshot and input ordering. Item order
/// never changes the numeric total, only the stored item sequence.
pub struct PricingResolver;

impl PricingResolver {
    /// Compute the total for the requested items.
    ///
    /// Each item's price starts at the dish base price. A selected option
    /// adds the option's flat `extra` when the option declares one;
    /// otherwise the selected choice's `extra` applies when present.
    /// Selections naming no option or choice on the dish contribute
    /// nothing: stale menu references are tolerated instead of failing
    /// checkout.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::DishNotFound`] if any requested dish id
    /// resolves to nothing. The whole computation fails; no partial result
    /// is produced.
    pub fn compute_total<'a, F>(
        items: &[OrderItemRequest],
        mut dish_lookup: F,
    ) -> Result<PricedOrder, OrderError>
    where
        F: FnMut(DishId) -> Option<&'a Dish>,
    {
        let mut total = Money::ZERO;
        let mut resolved = Vec::with_capacity(items.len());

        for item in items {
            let dish = dish_lookup(item.dish_id).ok_or(OrderError::DishNotFound {
                dish_id: item.dish_id,
            })?;

            total += Self::item_price(dish, &item.options);
            resolved.push(ResolvedItem {
                dish_id: item.dish_id,
                options: item.options.clone(),
            });
        }

        Ok(PricedOrder {
            total,
            items: resolved,
        })
    }

    /// Price one line item against its dish definition.
    #[must_use]
    pub fn item_price(dish: &Dish, selections: &[OrderItemOption]) -> Money {
        let mut price = dish.price;

        for selection in selections {
            let Some(option) = dish.option(&selection.name) else {
                continue;
            };

            if let Some(extra) = option.extra {
                price += extra;
            } else if let Some(choice_name) = selection.choice.as_deref() {
                if let Some(extra) = option.choice(choice_name).and_then(|choice| choice.extra) {
                    price += extra;
                }
            }
        }

        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{DishOption, DishOptionChoice};
    use crate::domain::shared::RestaurantId;
    use proptest::prelude::*;

    fn dish(id: i64, price_cents: i64, options: Option<Vec<DishOption>>) -> Dish {
        Dish {
            id: DishId::new(id),
            restaurant_id: RestaurantId::new(1),
            name: format!("dish-{id}"),
            price: Money::from_cents(price_cents),
            description: "test dish".to_string(),
            photo: None,
            options,
        }
    }

    fn size_option(large_extra: i64) -> DishOption {
        DishOption {
            name: "size".to_string(),
            extra: None,
            choices: Some(vec![
                DishOptionChoice {
                    name: "large".to_string(),
                    extra: Some(Money::from_cents(large_extra)),
                },
                DishOptionChoice {
                    name: "regular".to_string(),
                    extra: None,
                },
            ]),
        }
    }

    #[test]
    fn base_price_with_no_selections() {
        let dish = dish(1, 1000, None);
        let priced = PricingResolver::compute_total(
            &[OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![],
            }],
            |_| Some(&dish),
        )
        .unwrap();

        assert_eq!(priced.total, Money::from_cents(1000));
        assert_eq!(priced.items.len(), 1);
    }

    #[test]
    fn flat_option_extra_is_added() {
        let dish = dish(
            1,
            1000,
            Some(vec![DishOption {
                name: "spicy".to_string(),
                extra: Some(Money::from_cents(100)),
                choices: None,
            }]),
        );

        let priced = PricingResolver::compute_total(
            &[OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![OrderItemOption::flat("spicy")],
            }],
            |_| Some(&dish),
        )
        .unwrap();

        assert_eq!(priced.total, Money::from_cents(1100));
    }

    #[test]
    fn choice_extra_is_added_when_option_has_no_flat_extra() {
        let dish = dish(1, 1000, Some(vec![size_option(200)]));

        let priced = PricingResolver::compute_total(
            &[OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![OrderItemOption::with_choice("size", "large")],
            }],
            |_| Some(&dish),
        )
        .unwrap();

        assert_eq!(priced.total, Money::from_cents(1200));
    }

    #[test]
    fn free_choice_contributes_nothing() {
        let dish = dish(1, 1000, Some(vec![size_option(200)]));

        let priced = PricingResolver::compute_total(
            &[OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![OrderItemOption::with_choice("size", "regular")],
            }],
            |_| Some(&dish),
        )
        .unwrap();

        assert_eq!(priced.total, Money::from_cents(1000));
    }

    #[test]
    fn unmatched_option_name_is_silently_ignored() {
        let dish = dish(1, 1000, Some(vec![size_option(200)]));

        let priced = PricingResolver::compute_total(
            &[OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![OrderItemOption::flat("no-such-option")],
            }],
            |_| Some(&dish),
        )
        .unwrap();

        assert_eq!(priced.total, Money::from_cents(1000));
    }

    #[test]
    fn unmatched_choice_name_is_silently_ignored() {
        let dish = dish(1, 1000, Some(vec![size_option(200)]));

        let priced = PricingResolver::compute_total(
            &[OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![OrderItemOption::with_choice("size", "no-such-choice")],
            }],
            |_| Some(&dish),
        )
        .unwrap();

        assert_eq!(priced.total, Money::from_cents(1000));
    }

    #[test]
    fn missing_dish_fails_whole_computation() {
        let existing = dish(1, 1000, None);
        let err = PricingResolver::compute_total(
            &[
                OrderItemRequest {
                    dish_id: DishId::new(1),
                    options: vec![],
                },
                OrderItemRequest {
                    dish_id: DishId::new(99),
                    options: vec![],
                },
            ],
            |id| (id == DishId::new(1)).then_some(&existing),
        )
        .unwrap_err();

        assert_eq!(
            err,
            OrderError::DishNotFound {
                dish_id: DishId::new(99)
            }
        );
    }

    #[test]
    fn multiple_items_accumulate() {
        let cheap = dish(1, 500, None);
        let pricey = dish(2, 2000, Some(vec![size_option(300)]));

        let priced = PricingResolver::compute_total(
            &[
                OrderItemRequest {
                    dish_id: DishId::new(1),
                    options: vec![],
                },
                OrderItemRequest {
                    dish_id: DishId::new(2),
                    options: vec![OrderItemOption::with_choice("size", "large")],
                },
            ],
            |id| {
                if id == DishId::new(1) {
                    Some(&cheap)
                } else {
                    Some(&pricey)
                }
            },
        )
        .unwrap();

        assert_eq!(priced.total, Money::from_cents(2800));
        assert_eq!(priced.items.len(), 2);
    }

    #[test]
    fn resolved_items_preserve_request_order_and_selections() {
        let d = dish(1, 100, None);
        let requests = vec![
            OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![OrderItemOption::flat("a")],
            },
            OrderItemRequest {
                dish_id: DishId::new(1),
                options: vec![OrderItemOption::flat("b")],
            },
        ];

        let priced = PricingResolver::compute_total(&requests, |_| Some(&d)).unwrap();

        assert_eq!(priced.items[0].options[0].name, "a");
        assert_eq!(priced.items[1].options[0].name, "b");
    }

    proptest! {
        #[test]
        fn total_is_base_plus_matched_surcharges(
            base in 0i64..100_000,
            flat_extra in 0i64..10_000,
            choice_extra in 0i64..10_000,
            pick_flat in any::<bool>(),
            pick_choice in any::<bool>(),
        ) {
            let dish = dish(
                1,
                base,
                Some(vec![
                    DishOption {
                        name: "flat".to_string(),
                        extra: Some(Money::from_cents(flat_extra)),
                        choices: None,
                    },
                    size_option(choice_extra),
                ]),
            );

            let mut selections = Vec::new();
            let mut expected = base;
            if pick_flat {
                selections.push(OrderItemOption::flat("flat"));
                expected += flat_extra;
            }
            if pick_choice {
                selections.push(OrderItemOption::with_choice("size", "large"));
                expected += choice_extra;
            }
            // A stale selection never contributes.
            selections.push(OrderItemOption::flat("discontinued"));

            let priced = PricingResolver::compute_total(
                &[OrderItemRequest { dish_id: DishId::new(1), options: selections }],
                |_| Some(&dish),
            ).unwrap();

            prop_assert_eq!(priced.total, Money::from_cents(expected));
        }

        #[test]
        fn item_order_never_changes_the_total(
            prices in proptest::collection::vec(0i64..50_000, 1..8),
        ) {
            let dishes: Vec<Dish> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| dish(i as i64 + 1, *p, None))
                .collect();

            let forward: Vec<OrderItemRequest> = dishes
                .iter()
                .map(|d| OrderItemRequest { dish_id: d.id, options: vec![] })
                .collect();
            let mut reversed = forward.clone();
            reversed.reverse();

            let lookup = |id: DishId| dishes.iter().find(|d| d.id == id);

            let a = PricingResolver::compute_total(&forward, lookup).unwrap();
            let b = PricingResolver::compute_total(&reversed, lookup).unwrap();

            prop_assert_eq!(a.total, b.total);
        }
    }
}
