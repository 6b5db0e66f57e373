use anyhow::Context;
use todo_server::{config::Config, db, render::Templates, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Error connecting DB at {}", config.database_url))?;
    db::migrate(&db).await.context("Error running migrations")?;

    let templates = Templates::new().context("Error compiling templates")?;

    let state = AppState { db, templates };

    let app = todo_server::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Error binding {}", config.addr()))?;

    tracing::info!("server is running at http://{}", config.addr());

    axum::serve(listener, app).await?;

    Ok(())
}
