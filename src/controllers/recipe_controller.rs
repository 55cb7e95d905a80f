use sqlx::SqlitePool;
use tracing::info;

use crate::error::{RecetteError, Result};
use crate::models::{Recipe, RecipeRecord};

const RECIPE_COLUMNS: &str = "id, title, description, ingredients, instructions, cooking_time, servings, difficulty, tags, estimated_budget, estimated_calories, author_id, author_name, created_at, likes, is_public";

/// Fetch all recipes, newest first
pub async fn list_recipes(pool: &SqlitePool) -> Result<Vec<Recipe>> {
    let records = sqlx::query_as::<_, RecipeRecord>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    records.into_iter().map(RecipeRecord::into_recipe).collect()
}

/// Fetch the well-liked recipes: more than 4 likes, most liked first,
/// capped at 10
pub async fn liked_recipes(pool: &SqlitePool) -> Result<Vec<Recipe>> {
    let records = sqlx::query_as::<_, RecipeRecord>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE likes > 4 ORDER BY likes DESC LIMIT 10"
    ))
    .fetch_all(pool)
    .await?;

    records.into_iter().map(RecipeRecord::into_recipe).collect()
}

/// Fetch a recipe by id
pub async fn get_recipe(pool: &SqlitePool, recipe_id: &str) -> Result<Recipe> {
    let record = sqlx::query_as::<_, RecipeRecord>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?"
    ))
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RecetteError::RecipeNotFound(recipe_id.to_string()))?;

    record.into_recipe()
}

/// Store a recipe document, replacing any existing document with the same id
pub async fn put_recipe(pool: &SqlitePool, recipe: &Recipe) -> Result<()> {
    let record = RecipeRecord::from_recipe(recipe)?;

    sqlx::query(
        "INSERT OR REPLACE INTO recipes (id, title, description, ingredients, instructions, cooking_time, servings, difficulty, tags, estimated_budget, estimated_calories, author_id, author_name, created_at, likes, is_public) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.id)
    .bind(&record.title)
    .bind(&record.description)
    .bind(&record.ingredients)
    .bind(&record.instructions)
    .bind(&record.cooking_time)
    .bind(&record.servings)
    .bind(&record.difficulty)
    .bind(&record.tags)
    .bind(&record.estimated_budget)
    .bind(&record.estimated_calories)
    .bind(&record.author_id)
    .bind(&record.author_name)
    .bind(record.created_at)
    .bind(record.likes)
    .bind(record.is_public)
    .execute(pool)
    .await?;

    info!(recipe_id = %recipe.id, title = %recipe.title, "stored recipe");
    Ok(())
}

/// Delete a recipe by id
pub async fn delete_recipe(pool: &SqlitePool, recipe_id: &str) -> Result<()> {
    let deleted = sqlx::query("DELETE FROM recipes WHERE id = ?")
        .bind(recipe_id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(RecetteError::RecipeNotFound(recipe_id.to_string()));
    }

    info!(recipe_id, "deleted recipe");
    Ok(())
}

/// Increment a recipe's like counter, returning the new count
pub async fn like_recipe(pool: &SqlitePool, recipe_id: &str) -> Result<i64> {
    let likes: Option<i64> =
        sqlx::query_scalar("UPDATE recipes SET likes = likes + 1 WHERE id = ? RETURNING likes")
            .bind(recipe_id)
            .fetch_optional(pool)
            .await?;

    likes.ok_or_else(|| RecetteError::RecipeNotFound(recipe_id.to_string()))
}
