use std::collections::HashSet;

use crossterm::event::KeyCode;
use ratatui::Frame;

use super::planner_states::RecipePicker;
use crate::models::api::{ShoppingItem, ShoppingList};
use crate::models::{Recipe, Selection};
use crate::shopping::build_shopping_list;

pub enum AppAction {
    Continue, // Keep running
    Exit,     // Esc/q pressed - leave the planner
}

pub struct PlannerApp {
    state: Box<dyn PlannerState>,
    context: PlannerContext,
}

pub struct PlannerContext {
    pub recipes: Vec<Recipe>,
    pub selection: Selection,
    pub checked: HashSet<String>, // item ids already at home
    pub list: ShoppingList,
}

impl PlannerContext {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let selection = Selection::new();
        let list = build_shopping_list(&selection);
        Self {
            recipes,
            selection,
            checked: HashSet::new(),
            list,
        }
    }

    /// Recompute the derived shopping list. Called after every change to the
    /// selection set or a serving count; the list has no state of its own.
    pub fn refresh(&mut self) {
        self.list = build_shopping_list(&self.selection);
        // Checks for items that fell out of the list are meaningless now
        self.checked
            .retain(|id| self.list.items.iter().any(|item| &item.id == id));
    }

    pub fn toggle_checked(&mut self, item_id: &str) {
        if !self.checked.remove(item_id) {
            self.checked.insert(item_id.to_string());
        }
    }

    /// Items still left to buy today.
    pub fn remaining(&self) -> Vec<&ShoppingItem> {
        self.list
            .items
            .iter()
            .filter(|item| !self.checked.contains(&item.id))
            .collect()
    }
}

pub(crate) trait PlannerState {
    fn render(&self, context: &PlannerContext, frame: &mut Frame);
    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut PlannerContext,
    ) -> Option<Box<dyn PlannerState>>;
}

impl PlannerApp {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            state: Box::new(RecipePicker::new()),
            context: PlannerContext::new(recipes),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.state.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc || key == KeyCode::Char('q') {
            return AppAction::Exit;
        }

        // otherwise let the current page handle it
        if let Some(next_state) = self.state.handle_key(key, &mut self.context) {
            self.state = next_state
        }

        AppAction::Continue
    }

    /// Consume the app and return the planner context
    pub fn into_context(self) -> PlannerContext {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::recipe_named;

    #[test]
    fn test_refresh_drops_checks_for_removed_items() {
        let recipe = recipe_named("カレー", "2人分", &[("玉ねぎ", "2個")]);
        let mut context = PlannerContext::new(vec![recipe.clone()]);

        context.selection.toggle(&recipe);
        context.refresh();
        context.toggle_checked("玉ねぎ");
        assert!(context.remaining().is_empty());

        // Deselecting the recipe removes the item and its check
        context.selection.toggle(&recipe);
        context.refresh();
        assert!(context.checked.is_empty());
    }

    #[test]
    fn test_remaining_excludes_checked_items() {
        let recipe = recipe_named("カレー", "2人分", &[("玉ねぎ", "2個"), ("にんじん", "1本")]);
        let mut context = PlannerContext::new(vec![recipe.clone()]);
        context.selection.toggle(&recipe);
        context.refresh();

        context.toggle_checked("にんじん");

        let names: Vec<&str> = context.remaining().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["玉ねぎ"]);
    }
}
