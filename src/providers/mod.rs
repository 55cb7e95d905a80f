mod health;
mod identity;
mod repository;

pub use health::{FixedHealthProvider, HealthProvider, UnavailableHealthProvider};
pub use identity::{Credentials, IdentityProvider, StubIdentityProvider, UserProfile};
pub use repository::{MemoryRecipeRepository, RecipeRepository, SqliteRecipeRepository};
