use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Properties API",
        version = "0.1.0",
        description = "CRUD and search for real-estate property listings"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_properties::URL, api = domain_properties::ApiDoc)
    )
)]
pub struct ApiDoc;
