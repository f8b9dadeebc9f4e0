//! Handler tests for the users domain
//!
//! These run the users router against the in-memory repository and check
//! what a client sees on the wire:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization, including the `MM/dd/yyyy` birthdate
//! - HTTP status codes and error bodies

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_users::*;
use http_body_util::BodyExt;
use sea_orm::DbErr;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new()))
}

async fn body_text(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json_body(body: Body) -> Value {
    serde_json::from_str(&body_text(body).await).unwrap()
}

fn register_request(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_register_returns_saved_user() {
    let app = app();

    let response = app
        .oneshot(register_request(json!({
            "name": "Alice",
            "surname": "Smith",
            "gender": "F",
            "birthdate": "01/31/2000",
            "address": { "homeAddress": "1 Main St" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let user = json_body(response.into_body()).await;
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["birthdate"], "01/31/2000");
    assert_eq!(user["address"]["homeAddress"], "1 Main St");
    assert_eq!(user["address"]["workAddress"], Value::Null);
    assert_eq!(user["address"]["userId"], 1);
}

#[tokio::test]
async fn test_register_accepts_iso_birthdate() {
    let response = app()
        .oneshot(register_request(json!({
            "name": "Alice",
            "surname": "Smith",
            "gender": "F",
            "birthdate": "2000-01-31"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let user = json_body(response.into_body()).await;
    assert_eq!(user["birthdate"], "01/31/2000");
}

#[tokio::test]
async fn test_register_ignores_client_supplied_id() {
    let response = app()
        .oneshot(register_request(json!({
            "id": 999,
            "name": "Alice",
            "surname": "Smith",
            "gender": "F",
            "birthdate": "01/31/2000"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let user = json_body(response.into_body()).await;
    assert_eq!(user["id"], 1);
}

#[tokio::test]
async fn test_register_empty_object_lists_required_fields() {
    let response = app().oneshot(register_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    assert_eq!(
        body_text(response.into_body()).await,
        "Name is required.\nSurname is required.\nGender is required.\nBirthdate is required."
    );
}

#[tokio::test]
async fn test_register_reports_name_format() {
    let response = app()
        .oneshot(register_request(json!({
            "name": "alice",
            "surname": "Sm1th",
            "gender": "F",
            "birthdate": "01/31/2000"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "Name must start with a capital letter and contain only letters.\n\
         Surname must start with a capital letter and contain only letters."
    );
}

#[tokio::test]
async fn test_register_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_list_reports_page_metadata() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("list_metadata");

    for i in 0..15 {
        let response = app
            .clone()
            .oneshot(register_request(json!({
                "name": builder.person_name(i),
                "surname": "Smith",
                "gender": "M",
                "birthdate": "05/17/1990"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(get("/users?page=1&size=10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = json_body(response.into_body()).await;
    assert_eq!(page["content"].as_array().unwrap().len(), 5);
    assert_eq!(page["totalElements"], 15);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["number"], 1);
    assert_eq!(page["size"], 10);
    assert_eq!(page["numberOfElements"], 5);
    assert_eq!(page["first"], false);
    assert_eq!(page["last"], true);
    assert_eq!(page["empty"], false);
    assert_eq!(page["content"][0]["id"], 11);
    assert_eq!(page["content"][0]["name"], builder.person_name(10));
}

#[tokio::test]
async fn test_list_defaults_to_first_page_of_ten() {
    let response = app().oneshot(get("/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = json_body(response.into_body()).await;
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 10);
    assert_eq!(page["totalPages"], 0);
    assert_eq!(page["empty"], true);
    assert_eq!(page["first"], true);
    assert_eq!(page["last"], true);
}

#[tokio::test]
async fn test_list_rejects_out_of_range_size() {
    for uri in ["/users?size=0", "/users?size=1001"] {
        let response = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_list_rejects_negative_page() {
    let response = app().oneshot(get("/users?page=-1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let response = app().oneshot(get("/users/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "User with id 42 not found");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let response = app().oneshot(get("/users/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = app();

    let response = app
        .clone()
        .oneshot(register_request(json!({
            "name": "Alice",
            "surname": "Smith",
            "gender": "F",
            "birthdate": "01/31/2000"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    for _ in 0..2 {
        let response = app.clone().oneshot(delete("/users/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_text(response.into_body()).await.is_empty());
    }

    let response = app.oneshot(get("/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Repository whose every call fails the way a dropped connection does
struct UnreachableDatabase;

fn connection_lost() -> UserError {
    UserError::Database(DbErr::Conn(sea_orm::RuntimeErr::Internal(
        "connection refused".to_string(),
    )))
}

#[async_trait]
impl UserRepository for UnreachableDatabase {
    async fn create(&self, _user: ValidatedUser) -> UserResult<User> {
        Err(connection_lost())
    }

    async fn get_by_id(&self, _id: i64) -> UserResult<Option<User>> {
        Err(connection_lost())
    }

    async fn list(&self, _offset: u64, _limit: u64) -> UserResult<Vec<User>> {
        Err(connection_lost())
    }

    async fn count(&self) -> UserResult<u64> {
        Err(connection_lost())
    }

    async fn delete(&self, _id: i64) -> UserResult<bool> {
        Err(connection_lost())
    }
}

#[tokio::test]
async fn test_database_failure_is_generic_database_error() {
    let app = handlers::router(UserService::new(UnreachableDatabase));

    for request in [get("/users/1"), get("/users"), delete("/users/1")] {
        let uri = request.uri().to_string();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

        let text = body_text(response.into_body()).await;
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert_eq!(body["code"], 2003);
        assert_eq!(body["message"], "An unexpected error occurred.");
        assert!(!text.contains("connection refused"));
    }
}
