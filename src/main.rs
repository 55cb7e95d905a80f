use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recette::controllers::put_recipe;
use recette::models::demo_recipes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Database URL - in production, you'd use an environment variable
    let database_url = "sqlite://recette.db";

    // Create database if it doesn't exist
    if !sqlx::Sqlite::database_exists(database_url).await? {
        info!(database_url, "creating database");
        sqlx::Sqlite::create_database(database_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    // Run migrations
    info!("running migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Seed the demo recipes on first run
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
        .fetch_one(&pool)
        .await?;
    if count == 0 {
        for recipe in demo_recipes() {
            put_recipe(&pool, &recipe).await?;
        }
        info!("seeded demo recipes");
    }

    info!("database setup complete");
    Ok(())
}
