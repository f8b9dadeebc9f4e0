use axum::Router;
use domain_users::{UserRepository, UserService};

pub mod health;

/// Versioned API routes, without the `/api` prefix added by `create_router`.
pub fn routes<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new().nest("/v", domain_users::handlers::router(service))
}

/// Router with the `/ready` endpoint, which checks the database when one is configured.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
