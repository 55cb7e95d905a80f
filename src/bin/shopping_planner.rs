use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use recette::{
    providers::{
        FixedHealthProvider, HealthProvider, MemoryRecipeRepository, RecipeRepository,
        SqliteRecipeRepository,
    },
    tui::app::{AppAction, PlannerApp},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // Demo mode runs entirely in memory, like the app's preview builds
    let repository: Box<dyn RecipeRepository> = if std::env::var("RECETTE_DEMO").is_ok() {
        Box::new(MemoryRecipeRepository::demo())
    } else {
        let database_url = "sqlite://recette.db";

        if !sqlx::Sqlite::database_exists(database_url).await? {
            sqlx::Sqlite::create_database(database_url).await?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Box::new(SqliteRecipeRepository::new(pool))
    };

    // Plan around the well-liked recipes; fall back to everything when
    // nothing has enough likes yet
    let mut recipes = repository.liked().await?;
    if recipes.is_empty() {
        recipes = repository.list().await?;
    }

    // Today's activity, degrading to 0 steps when the store has nothing
    let health = FixedHealthProvider::demo();
    let steps = match health.daily_step_count(Utc::now().date_naive()).await {
        Ok(steps) => steps,
        Err(error) => {
            warn!(%error, "step count unavailable");
            0
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = PlannerApp::new(recipes);

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|f| app.render(f))?;

        // Handle input
        if let Event::Key(key) = event::read()? {
            match app.handle_key(key.code) {
                AppAction::Continue => {}
                AppAction::Exit => break,
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    // Print the result of the planning session
    let context = app.into_context();

    if context.selection.is_empty() {
        println!("レシピが選択されていません。");
    } else {
        println!("今日の買い物リスト:");
        for item in context.remaining() {
            println!("  - {}", item.to_string());
        }
        println!("推定予算: ¥{}-", context.list.total_budget);
        println!("推定カロリー: {}kcal", context.list.total_calories);
    }
    println!("今日の歩数: {steps}歩");

    Ok(())
}
