//! Shared state for the application-level endpoints.
//!
//! The users domain owns its own state; this only carries what the
//! readiness probe needs.

#[derive(Clone, Default)]
pub struct AppState {
    /// PostgreSQL pool, absent when running on the in-memory store
    pub db: Option<database::postgres::DatabaseConnection>,
}
