use axum_helpers::server::{close_database, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserRepository, PgUserRepository, UserService};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let (api_routes, state) = match config.database.clone() {
        Some(pg_config) => {
            let db = database::postgres::connect_from_config_with_retry(pg_config, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
                .await
                .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

            let service = UserService::new(PgUserRepository::new(db.clone()));
            (api::routes(service), AppState { db: Some(db) })
        }
        None => {
            warn!("DATABASE_URL is not set, users are kept in memory and lost on restart");
            let service = UserService::new(InMemoryUserRepository::new());
            (api::routes(service), AppState::default())
        }
    };

    let router = create_router::<openapi::ApiDoc>(api_routes, &config.server)?;

    // - /health: liveness with app name/version
    // - /ready: pings the database when one is configured
    let app = router
        .merge(health_router(config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        app = config.app.name,
        version = config.app.version,
        store = config.store(),
        "Starting registry API (30s shutdown timeout)"
    );

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        close_database(state.db),
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Registry API shutdown complete");
    Ok(())
}
