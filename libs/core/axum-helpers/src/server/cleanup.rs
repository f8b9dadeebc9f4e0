use sea_orm::DatabaseConnection;
use tracing::{error, info};

/// Close the PostgreSQL pool during shutdown, if the service opened one.
///
/// Dropping the pool would also close it; closing here makes the outcome
/// visible in the logs before the process exits.
pub async fn close_database(db: Option<DatabaseConnection>) {
    let Some(db) = db else {
        info!("In-memory store in use, no database pool to close");
        return;
    };

    match db.close().await {
        Ok(()) => info!("PostgreSQL pool closed"),
        Err(e) => error!(error = %e, "Failed to close PostgreSQL pool"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_close_without_pool_is_noop() {
        close_database(None).await;
    }
}
