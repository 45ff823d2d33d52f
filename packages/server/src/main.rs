use std::time::Duration;

use anyhow::Context;
use tracing::{Level, info};

use quiz_server::config::AppConfig;
use quiz_server::session_store::{SeaOrmStore, spawn_cleanup_task};
use quiz_server::state::AppState;
use quiz_server::{build_router, database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(Level::INFO)
        .init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    seed::seed_quizzes(&db)
        .await
        .context("Failed to seed quizzes")?;

    let cleanup_handle = spawn_cleanup_task(
        SeaOrmStore::new(db.clone()),
        Duration::from_secs(config.session.cleanup_interval_secs),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState { db, config });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cleanup_handle.abort();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
