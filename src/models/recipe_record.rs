use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

use crate::error::Result;
use crate::models::{Difficulty, Recipe};

/// Row shape of the recipes table. The list-valued fields of a recipe
/// document (ingredients, instructions, tags) are JSON-encoded TEXT columns.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub cooking_time: String,
    pub servings: String,
    pub difficulty: String,
    pub tags: String,
    pub estimated_budget: String,
    pub estimated_calories: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub is_public: bool,
}

impl RecipeRecord {
    /// Decode the JSON columns and build the domain recipe.
    pub fn into_recipe(self) -> Result<Recipe> {
        Ok(Recipe {
            id: self.id,
            title: self.title,
            description: self.description,
            ingredients: serde_json::from_str(&self.ingredients)?,
            instructions: serde_json::from_str(&self.instructions)?,
            cooking_time: self.cooking_time,
            servings: self.servings,
            difficulty: Difficulty::from(self.difficulty),
            tags: serde_json::from_str(&self.tags)?,
            estimated_budget: self.estimated_budget,
            estimated_calories: self.estimated_calories,
            author_id: self.author_id,
            author_name: self.author_name,
            created_at: self.created_at,
            likes: self.likes,
            is_public: self.is_public,
        })
    }

    pub fn from_recipe(recipe: &Recipe) -> Result<Self> {
        Ok(Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: serde_json::to_string(&recipe.ingredients)?,
            instructions: serde_json::to_string(&recipe.instructions)?,
            cooking_time: recipe.cooking_time.clone(),
            servings: recipe.servings.clone(),
            difficulty: String::from(recipe.difficulty),
            tags: serde_json::to_string(&recipe.tags)?,
            estimated_budget: recipe.estimated_budget.clone(),
            estimated_calories: recipe.estimated_calories.clone(),
            author_id: recipe.author_id.clone(),
            author_name: recipe.author_name.clone(),
            created_at: recipe.created_at,
            likes: recipe.likes,
            is_public: recipe.is_public,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_recipes;
    use crate::models::test_fixtures::test_db;
    use rstest::*;
    use sqlx::SqlitePool;

    #[test]
    fn test_record_recipe_roundtrip() {
        let recipe = demo_recipes().remove(2);

        let record = RecipeRecord::from_recipe(&recipe).expect("Failed to encode recipe");
        let decoded = record.into_recipe().expect("Failed to decode record");

        assert_eq!(decoded, recipe);
    }

    #[test]
    fn test_malformed_ingredient_column_is_an_error() {
        let mut record =
            RecipeRecord::from_recipe(&demo_recipes().remove(0)).expect("Failed to encode recipe");
        record.ingredients = "not json".to_string();

        assert!(record.into_recipe().is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn test_record_model_compatibility_with_schema(#[future] test_db: SqlitePool) {
        let pool = test_db.await;
        let recipe = demo_recipes().remove(0);
        let record = RecipeRecord::from_recipe(&recipe).expect("Failed to encode recipe");

        // Insert a full row
        sqlx::query(
            "INSERT INTO recipes (id, title, description, ingredients, instructions, cooking_time, servings, difficulty, tags, estimated_budget, estimated_calories, author_id, author_name, created_at, likes, is_public) \
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
        .execute(&pool)
        .await
        .expect("Failed to insert recipe row");

        // Query and map back through the record type
        let fetched = sqlx::query_as::<_, RecipeRecord>("SELECT * FROM recipes WHERE id = ?")
            .bind(&recipe.id)
            .fetch_one(&pool)
            .await
            .expect("Failed to fetch recipe row");

        let decoded = fetched.into_recipe().expect("Failed to decode record");
        assert_eq!(decoded, recipe);
    }
}
