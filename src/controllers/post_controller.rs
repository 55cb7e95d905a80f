use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{RecetteError, Result};
use crate::models::{Difficulty, Ingredient, Recipe};
use crate::providers::{IdentityProvider, RecipeRepository};

/// Field values entered on the recipe posting screen, before the document
/// gets an id, an author, and a timestamp.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub servings: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub estimated_budget: String,
    pub estimated_calories: String,
    pub is_public: bool,
}

/// Publish a draft as a new recipe document authored by the signed-in user.
///
/// Posting requires a session: without one the draft is rejected before
/// anything is written.
pub async fn post_recipe(
    repository: &dyn RecipeRepository,
    identity: &dyn IdentityProvider,
    draft: RecipeDraft,
) -> Result<Recipe> {
    let author = identity
        .current_user()
        .await
        .ok_or_else(|| RecetteError::SignInFailed("posting requires a signed-in user".to_string()))?;

    let recipe = Recipe {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        description: draft.description,
        ingredients: draft.ingredients,
        instructions: draft.instructions,
        cooking_time: draft.cooking_time,
        servings: draft.servings,
        difficulty: draft.difficulty,
        tags: draft.tags,
        estimated_budget: draft.estimated_budget,
        estimated_calories: draft.estimated_calories,
        author_id: author.user_id,
        author_name: author.display_name,
        created_at: Utc::now(),
        likes: 0,
        is_public: draft.is_public,
    };

    repository.put(recipe.clone()).await?;
    info!(recipe_id = %recipe.id, author = %recipe.author_name, "posted recipe");
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{Credentials, MemoryRecipeRepository, StubIdentityProvider};

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "肉じゃが".to_string(),
            description: "定番の家庭料理".to_string(),
            ingredients: vec![
                Ingredient::new("じゃがいも", "4個"),
                Ingredient::new("牛肉", "200g"),
            ],
            instructions: vec!["切る".to_string(), "煮る".to_string()],
            cooking_time: "40分".to_string(),
            servings: "4人分".to_string(),
            difficulty: Difficulty::Normal,
            tags: vec!["和食".to_string()],
            estimated_budget: "900円".to_string(),
            estimated_calories: "600kcal".to_string(),
            is_public: true,
        }
    }

    #[tokio::test]
    async fn test_post_recipe_stamps_author_and_id() {
        let repository = MemoryRecipeRepository::new(Vec::new());
        let identity = StubIdentityProvider::demo();
        identity
            .sign_in(Credentials::EmailPassword {
                email: "demo@recette.example".to_string(),
                password: "demodemo".to_string(),
            })
            .await
            .expect("Failed to sign in");

        let posted = post_recipe(&repository, &identity, draft())
            .await
            .expect("Failed to post recipe");

        assert!(!posted.id.is_empty());
        assert_eq!(posted.author_id, "demoUser1");
        assert_eq!(posted.author_name, "デモユーザー1");
        assert_eq!(posted.likes, 0);

        let stored = repository
            .get(&posted.id)
            .await
            .expect("Failed to fetch posted recipe");
        assert_eq!(stored, posted);
    }

    #[tokio::test]
    async fn test_post_recipe_requires_sign_in() {
        let repository = MemoryRecipeRepository::new(Vec::new());
        let identity = StubIdentityProvider::demo();

        let result = post_recipe(&repository, &identity, draft()).await;

        assert!(matches!(result, Err(RecetteError::SignInFailed(_))));
        assert!(
            repository
                .list()
                .await
                .expect("Failed to list recipes")
                .is_empty()
        );
    }
}
