use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User Registry API",
        version = "0.1.0",
        description = "Register, list, fetch and delete users"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
