use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors are reported in color
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    observability::init_metrics()
        .map_err(|e| eyre::eyre!("Metrics recorder setup failed: {}", e))?;

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;
    }

    let state = AppState { config, db };

    let api_routes = api::routes(&state);

    // Docs UIs, /api prefix, fallbacks, tracing, security headers, CORS, compression
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)?;

    // /health: liveness with app name/version
    // /ready: database ping, /metrics: Prometheus
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ops_router(state.clone()));

    info!(
        address = %state.config.server.address(),
        "Starting properties API (30s graceful shutdown)"
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match state.db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Properties API shutdown complete");
    Ok(())
}
