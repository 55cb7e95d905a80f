mod recipe;
mod recipe_record;
mod selection;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use recipe::{Difficulty, Ingredient, Recipe, demo_recipes};
pub use recipe_record::RecipeRecord;
pub use selection::{SelectedRecipe, Selection};
