use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Round-trip a trivial query and report how long it took.
///
/// The readiness endpoint treats any error as "disconnected".
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<Duration> {
    let started = Instant::now();

    db.query_one_raw(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT 1".to_owned(),
    ))
    .await
    .map_err(DatabaseError::Unhealthy)?;

    let elapsed = started.elapsed();
    debug!(elapsed_ms = elapsed.as_millis() as u64, "PostgreSQL probe answered");
    Ok(elapsed)
}
