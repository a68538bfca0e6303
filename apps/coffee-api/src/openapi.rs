//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee Service API",
        version = "0.1.0",
        description = "Reactive coffee catalog with a per-coffee SSE order stream",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/coffees", api = domain_coffees::ApiDoc)
    ),
    tags(
        (name = "Coffees", description = "Coffee catalog and order stream endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
