use chrono::Utc;
use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::models::{Difficulty, Ingredient, Recipe};

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// This fixture can be imported and used across all model tests to ensure
/// consistency in test database setup.
#[fixture]
pub async fn test_db() -> SqlitePool {
    // Create an in-memory SQLite database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Minimal recipe for aggregation tests; the id doubles as the title.
pub fn recipe_named(title: &str, servings: &str, ingredients: &[(&str, &str)]) -> Recipe {
    recipe_with_estimates(title, servings, ingredients, "500円", "300kcal")
}

pub fn recipe_with_estimates(
    title: &str,
    servings: &str,
    ingredients: &[(&str, &str)],
    budget: &str,
    calories: &str,
) -> Recipe {
    Recipe {
        id: title.to_string(),
        title: title.to_string(),
        description: String::new(),
        ingredients: ingredients
            .iter()
            .map(|(name, amount)| Ingredient::new(*name, *amount))
            .collect(),
        instructions: vec!["手順1".to_string()],
        cooking_time: "30分".to_string(),
        servings: servings.to_string(),
        difficulty: Difficulty::Normal,
        tags: Vec::new(),
        estimated_budget: budget.to_string(),
        estimated_calories: calories.to_string(),
        author_id: "tester".to_string(),
        author_name: "テスター".to_string(),
        created_at: Utc::now(),
        likes: 0,
        is_public: true,
    }
}
