use anyhow::Context;
use trivia_api::configuration::get_configuration;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::{server::app::run_server, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = get_configuration().context("Failed to read configuration")?;
    let pool = establish_connection(&settings.db_path, settings.max_connections)
        .await
        .with_context(|| format!("Cannot open database at {}", settings.db_path))?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await.context("Migrations failed")?;

    run_server(pool, &settings).await
}
