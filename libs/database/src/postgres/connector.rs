use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a connection pool described by `config`.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let pool_size = config.max_connections;
    let db = Database::connect(config.into_connect_options()).await?;
    info!(max_connections = pool_size, "Connected to PostgreSQL");
    Ok(db)
}

/// Like [`connect_from_config`], retrying with exponential backoff.
///
/// The database container usually comes up alongside the service, so the
/// first attempts are expected to fail.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry_config = retry_config.unwrap_or_default();
    let attempts = retry_config.max_retries.saturating_add(1);

    retry_with_backoff(|| connect_from_config(config.clone()), retry_config)
        .await
        .map_err(|source| DatabaseError::ConnectionFailed { attempts, source })
}

/// Apply all pending migrations of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(DatabaseError::Migration)?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
