use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with id {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid page request: {0}")]
    InvalidPage(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User with id {id} not found")),
            UserError::Validation(errors) => AppError::BadRequest(errors.to_string()),
            UserError::InvalidPage(msg) => AppError::BadRequest(msg),
            UserError::Database(err) => AppError::Database(err),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

/// Validation failures go back as the plain-text list of messages, one per
/// line; everything else uses the shared JSON error body.
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::Validation(errors) => {
                tracing::info!(violations = errors.len(), "Registration rejected");
                (StatusCode::BAD_REQUEST, errors.to_string()).into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use crate::validation::validate_candidate;
    use axum::http::header;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_plain_text() {
        let errors = validate_candidate(&NewUser::default()).unwrap_err();
        let response = UserError::from(errors).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(
            body_text(response).await,
            "Name is required.\nSurname is required.\nGender is required.\nBirthdate is required."
        );
    }

    #[tokio::test]
    async fn test_not_found_is_json() {
        let response = UserError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["message"], "User with id 42 not found");
    }

    #[tokio::test]
    async fn test_missing_row_from_database_is_not_found() {
        let response =
            UserError::from(DbErr::RecordNotFound("registered_users".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "DATABASE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_database_error_does_not_leak_details() {
        let response = UserError::from(DbErr::Custom("relation does not exist".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_text(response).await;
        assert!(body.contains("An unexpected error occurred."));
        assert!(!body.contains("relation does not exist"));
    }
}
