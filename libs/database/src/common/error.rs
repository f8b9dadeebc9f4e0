use sea_orm::DbErr;

/// Failures while managing the PostgreSQL pool.
///
/// Query errors raised by repositories stay as [`DbErr`]; this type only
/// covers startup, migrations and readiness probes.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("could not connect to PostgreSQL after {attempts} attempt(s): {source}")]
    ConnectionFailed {
        attempts: u32,
        #[source]
        source: DbErr,
    },

    #[error("PostgreSQL did not answer the probe query: {0}")]
    Unhealthy(#[source] DbErr),

    #[error("failed to apply migrations: {0}")]
    Migration(#[source] DbErr),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
