use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecetteError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Malformed recipe document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(String),

    #[error("Sign-in failed: {0}")]
    SignInFailed(String),

    #[error("Health data unavailable: {0}")]
    HealthUnavailable(String),
}

pub type Result<T> = std::result::Result<T, RecetteError>;
