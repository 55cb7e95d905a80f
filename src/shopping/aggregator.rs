use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::models::Selection;
use crate::models::api::{ShoppingItem, ShoppingList};
use crate::shopping::quantity::{parse_budget, parse_calories, scale_amount};
use crate::shopping::servings::{nominal_servings, serving_ratio};

/// Merge the ingredients of every selected recipe into one shopping list.
///
/// Pure and deterministic: the output depends only on the selection (recipes
/// plus their serving counts) and is recomputed from scratch on every call.
/// Each recipe's quantities are scaled by requested ÷ nominal servings; when
/// an ingredient name repeats across recipes the scaled amounts are joined
/// with " + " in selection order rather than summed, since amounts are
/// free text. Budget and calorie estimates, by contrast, are parsed and
/// summed numerically, each scaled by its own recipe's ratio.
///
/// Parse failures never abort the aggregation: an unknown serving count
/// means ratio 1.0, a non-numeric amount passes through unchanged, and an
/// unreadable estimate contributes zero.
pub fn build_shopping_list(selection: &Selection) -> ShoppingList {
    let mut merged: IndexMap<String, String> = IndexMap::new();
    let mut total_budget = 0.0;
    let mut total_calories = 0.0;

    for selected in selection.iter() {
        let recipe = &selected.recipe;
        let ratio = serving_ratio(selected.servings, nominal_servings(&recipe.servings));

        for ingredient in &recipe.ingredients {
            let scaled = scale_amount(&ingredient.amount, ratio);
            match merged.entry(ingredient.name.clone()) {
                Entry::Occupied(mut entry) => {
                    let quantity = entry.get_mut();
                    quantity.push_str(" + ");
                    quantity.push_str(&scaled);
                }
                Entry::Vacant(entry) => {
                    entry.insert(scaled);
                }
            }
        }

        total_budget += parse_budget(&recipe.estimated_budget) as f64 * ratio;
        total_calories += parse_calories(&recipe.estimated_calories) as f64 * ratio;
    }

    let mut items: Vec<ShoppingItem> = merged
        .into_iter()
        .map(|(name, quantity)| ShoppingItem {
            id: name.clone(),
            name,
            quantity,
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));

    ShoppingList {
        items,
        total_budget: format!("{}", total_budget.round() as i64),
        total_calories: format!("{}", total_calories.round() as i64),
    }
}
