/// OpenAPI documentation for Orbit API
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orbit API",
        version = "1.0.0",
        description = "CRUD REST backend for the Orbit platform. Exposes per-user task lists and a shared social feed of posts with comments and likes, including paginated, sorted, and filtered feed queries.",
        contact(
            name = "Orbit Team",
            email = "support@orbit.dev"
        ),
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
        (url = "https://api.orbit.dev", description = "Production server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "tasks", description = "Per-user task creation, retrieval, updates, and deletion"),
        (name = "posts", description = "Feed posts with pagination, sorting, and search"),
        (name = "comments", description = "Comment management on posts"),
        (name = "likes", description = "Like management on posts"),
        (name = "users", description = "Read-only identity lookups"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            )
        }
    }
}
