//! Users Domain
//!
//! User registration with an optional one-to-one address, paginated listing,
//! lookup and deletion.
//!
//! | Route                | Service call                 |
//! |----------------------|------------------------------|
//! | `POST /register`     | [`UserService::save_user`]   |
//! | `GET /users`         | [`UserService::list_users`]  |
//! | `GET /users/{id}`    | [`UserService::get_user`]    |
//! | `DELETE /users/{id}` | [`UserService::delete_user`] |
//!
//! Candidates go through [`validate_candidate`] before any repository call;
//! only a [`ValidatedUser`] can be stored. [`UserRepository`] has an
//! in-memory implementation for development and [`PgUserRepository`] for
//! PostgreSQL.
//!
//! ```rust,no_run
//! use domain_users::{InMemoryUserRepository, UserService, handlers};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let users = axum::Router::new().nest("/v", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{Address, NewAddress, NewUser, Page, PageRequest, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use validation::{ValidatedUser, ValidationErrors, Violation, validate_candidate};
