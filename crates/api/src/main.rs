use anyhow::Result;
use tracing::info;

mod app;
mod config;
mod error;
mod logging;
mod routes;
mod services;

use domain::services::seed;
use persistence::repositories::{PgBootstrapStore, PgGroupStore, PgUserStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting Gaia API v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&config.database_config()).await?;

    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations").run(&pool).await?;
    info!("Migrations completed");

    // One-time seed of the fixed groups and users; a no-op on every boot
    // after the marker has been claimed.
    let seeded = seed::run_initial_seed(
        &PgBootstrapStore::new(pool.clone()),
        &PgGroupStore::new(pool.clone()),
        &PgUserStore::new(pool.clone()),
    )
    .await?;
    if seeded {
        info!("Initial groups and users seeded");
    }

    let app = app::create_app(config.clone(), pool)?;

    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
