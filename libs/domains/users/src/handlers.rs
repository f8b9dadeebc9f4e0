use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_helpers::{
    IdPath, JsonBody, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{Address, NewAddress, NewUser, Page, PageRequest, User};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for the registration API
#[derive(OpenApi)]
#[openapi(
    paths(register_user, list_users, get_user, delete_user),
    components(
        schemas(User, Address, NewUser, NewAddress),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User registration endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router.
///
/// Paths are relative; the app nests this router under `/api/v`. The service
/// is the router state and is cloned per request, sharing one repository.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/register", post(register_user))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .with_state(service)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = TAG,
    request_body = NewUser,
    responses(
        (status = 200, description = "User registered", body = User),
        (status = 400, description = "Validation failed, one message per line",
            body = String, content_type = "text/plain"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    JsonBody(candidate): JsonBody<NewUser>,
) -> UserResult<Json<User>> {
    let user = service.save_user(candidate).await?;
    Ok(Json(user))
}

/// List users one page at a time
#[utoipa::path(
    get,
    path = "/users",
    tag = TAG,
    params(PageRequest),
    responses(
        (status = 200, description = "Page of users", body = Page<User>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<UserService<R>>,
    ValidatedQuery(request): ValidatedQuery<PageRequest>,
) -> UserResult<Json<Page<User>>> {
    let page = service.list_users(request).await?;
    Ok(Json(page))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Delete a user and their address
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted, or did not exist"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<UserService<R>>,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
