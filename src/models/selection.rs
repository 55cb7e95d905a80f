use indexmap::IndexMap;

use crate::models::Recipe;
use crate::shopping::nominal_servings;

/// A recipe picked for the shopping list together with the serving count the
/// user wants to cook, floor-clamped at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRecipe {
    pub recipe: Recipe,
    pub servings: u32,
}

/// The set of recipes currently selected for shopping, in selection order.
///
/// Selection order matters: merged ingredient quantities are concatenated in
/// the order the recipes were picked.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: IndexMap<String, SelectedRecipe>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe to the selection. The serving count starts at the
    /// recipe's own nominal servings (ratio 1.0), or 1 when the descriptor
    /// carries no usable count.
    pub fn select(&mut self, recipe: Recipe) {
        let servings = nominal_servings(&recipe.servings).max(1);
        self.entries
            .entry(recipe.id.clone())
            .or_insert(SelectedRecipe { recipe, servings });
    }

    /// Remove a recipe, keeping the relative order of the others.
    pub fn deselect(&mut self, recipe_id: &str) -> Option<SelectedRecipe> {
        self.entries.shift_remove(recipe_id)
    }

    /// Select if absent, deselect if present. Returns true when the recipe
    /// ends up selected.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if self.entries.contains_key(&recipe.id) {
            self.entries.shift_remove(&recipe.id);
            false
        } else {
            self.select(recipe.clone());
            true
        }
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.entries.contains_key(recipe_id)
    }

    pub fn servings_of(&self, recipe_id: &str) -> Option<u32> {
        self.entries.get(recipe_id).map(|s| s.servings)
    }

    pub fn set_servings(&mut self, recipe_id: &str, servings: u32) {
        if let Some(selected) = self.entries.get_mut(recipe_id) {
            selected.servings = servings.max(1);
        }
    }

    pub fn increment_servings(&mut self, recipe_id: &str) {
        if let Some(selected) = self.entries.get_mut(recipe_id) {
            selected.servings = selected.servings.saturating_add(1);
        }
    }

    /// Decrement the serving count, never below 1.
    pub fn decrement_servings(&mut self, recipe_id: &str) {
        if let Some(selected) = self.entries.get_mut(recipe_id) {
            selected.servings = selected.servings.saturating_sub(1).max(1);
        }
    }

    /// Selected recipes in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedRecipe> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::recipe_named;

    #[test]
    fn test_select_defaults_to_nominal_servings() {
        let mut selection = Selection::new();
        selection.select(recipe_named("カレー", "4人分", &[("玉ねぎ", "2個")]));

        assert_eq!(selection.servings_of("カレー"), Some(4));
    }

    #[test]
    fn test_select_defaults_to_one_when_servings_unknown() {
        let mut selection = Selection::new();
        selection.select(recipe_named("副菜", "適量", &[("オクラ", "8本")]));

        assert_eq!(selection.servings_of("副菜"), Some(1));
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut selection = Selection::new();
        selection.select(recipe_named("パスタ", "2人分", &[("トマト", "2個")]));

        selection.decrement_servings("パスタ");
        assert_eq!(selection.servings_of("パスタ"), Some(1));
        selection.decrement_servings("パスタ");
        assert_eq!(selection.servings_of("パスタ"), Some(1));
    }

    #[test]
    fn test_set_servings_clamps_at_one() {
        let mut selection = Selection::new();
        selection.select(recipe_named("パスタ", "2人分", &[("トマト", "2個")]));

        selection.set_servings("パスタ", 0);
        assert_eq!(selection.servings_of("パスタ"), Some(1));
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut selection = Selection::new();
        let first = recipe_named("一品目", "2人分", &[("ごはん", "2杯")]);
        let second = recipe_named("二品目", "2人分", &[("みそ", "大さじ2")]);
        let third = recipe_named("三品目", "2人分", &[("豆腐", "1丁")]);

        selection.toggle(&first);
        selection.toggle(&second);
        selection.toggle(&third);
        // Removing from the middle keeps the order of the rest
        let removed = selection.deselect("二品目");
        assert_eq!(removed.map(|s| s.recipe.id), Some("二品目".to_string()));

        let order: Vec<&str> = selection.iter().map(|s| s.recipe.id.as_str()).collect();
        assert_eq!(order, vec!["一品目", "三品目"]);
    }

    #[test]
    fn test_selecting_twice_keeps_adjusted_servings() {
        let mut selection = Selection::new();
        let recipe = recipe_named("カレー", "4人分", &[("玉ねぎ", "2個")]);

        selection.select(recipe.clone());
        selection.increment_servings("カレー");
        selection.select(recipe);

        assert_eq!(selection.servings_of("カレー"), Some(5));
    }
}
