mod post_controller;
mod recipe_controller;

pub use post_controller::{RecipeDraft, post_recipe};
pub use recipe_controller::{
    delete_recipe, get_recipe, like_recipe, liked_recipes, list_recipes, put_recipe,
};
