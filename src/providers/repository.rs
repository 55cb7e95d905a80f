use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::controllers;
use crate::error::{RecetteError, Result};
use crate::models::{Recipe, demo_recipes};

/// Narrow interface over the recipe document store. The app only ever needs
/// these operations; where the documents actually live (sqlite file, memory,
/// a remote store) is an implementation detail.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// All recipes, newest first.
    async fn list(&self) -> Result<Vec<Recipe>>;
    /// Well-liked recipes (more than 4 likes), most liked first, at most 10.
    async fn liked(&self) -> Result<Vec<Recipe>>;
    async fn get(&self, recipe_id: &str) -> Result<Recipe>;
    /// Insert or replace the document with the recipe's id.
    async fn put(&self, recipe: Recipe) -> Result<()>;
    async fn delete(&self, recipe_id: &str) -> Result<()>;
    /// Increment the like counter, returning the new count.
    async fn like(&self, recipe_id: &str) -> Result<i64>;
}

/// Recipe store backed by the sqlite database.
pub struct SqliteRecipeRepository {
    pool: SqlitePool,
}

impl SqliteRecipeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for SqliteRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>> {
        controllers::list_recipes(&self.pool).await
    }

    async fn liked(&self) -> Result<Vec<Recipe>> {
        controllers::liked_recipes(&self.pool).await
    }

    async fn get(&self, recipe_id: &str) -> Result<Recipe> {
        controllers::get_recipe(&self.pool, recipe_id).await
    }

    async fn put(&self, recipe: Recipe) -> Result<()> {
        controllers::put_recipe(&self.pool, &recipe).await
    }

    async fn delete(&self, recipe_id: &str) -> Result<()> {
        controllers::delete_recipe(&self.pool, recipe_id).await
    }

    async fn like(&self, recipe_id: &str) -> Result<i64> {
        controllers::like_recipe(&self.pool, recipe_id).await
    }
}

/// In-memory recipe store used by demo mode and tests.
pub struct MemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl MemoryRecipeRepository {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    /// Seeded with the fixed demo recipe set.
    pub fn demo() -> Self {
        Self::new(demo_recipes())
    }
}

#[async_trait]
impl RecipeRepository for MemoryRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>> {
        let mut recipes = self.recipes.read().await.clone();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(recipes)
    }

    async fn liked(&self) -> Result<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .read()
            .await
            .iter()
            .filter(|r| r.likes > 4)
            .cloned()
            .collect();
        recipes.sort_by(|a, b| b.likes.cmp(&a.likes));
        recipes.truncate(10);
        Ok(recipes)
    }

    async fn get(&self, recipe_id: &str) -> Result<Recipe> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned()
            .ok_or_else(|| RecetteError::RecipeNotFound(recipe_id.to_string()))
    }

    async fn put(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => recipes.push(recipe),
        }
        Ok(())
    }

    async fn delete(&self, recipe_id: &str) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| r.id != recipe_id);

        if recipes.len() == before {
            return Err(RecetteError::RecipeNotFound(recipe_id.to_string()));
        }
        Ok(())
    }

    async fn like(&self, recipe_id: &str) -> Result<i64> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or_else(|| RecetteError::RecipeNotFound(recipe_id.to_string()))?;

        recipe.likes += 1;
        Ok(recipe.likes)
    }
}
