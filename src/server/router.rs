//! HTTP routing and OpenAPI document assembly.
//!
//! Routes are registered through `utoipa_axum`'s `OpenApiRouter` so every handler's
//! `#[utoipa::path]` annotation lands in the generated document automatically.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{group::*, health::*, student::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "Manage students, groups and group memberships"
    ),
    tags(
        (name = "students", description = "Student records"),
        (name = "groups", description = "Groups and their memberships"),
        (name = "service", description = "Service information and health")
    )
)]
pub struct ApiDoc;

/// Collects every API route together with its OpenAPI description.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root))
        .routes(routes!(health))
        .routes(routes!(create_student, get_students))
        .routes(routes!(get_student, delete_student))
        .routes(routes!(create_group, get_groups))
        .routes(routes!(get_group, delete_group))
        .routes(routes!(get_group_students))
        .routes(routes!(add_student_to_group))
        .routes(routes!(remove_student_from_group))
        .routes(routes!(transfer_student))
}

/// Builds the complete application: API routes, Swagger UI and the HTTP layers.
///
/// # Arguments
/// - `state` - Shared application state handed to every handler
///
/// # Returns
/// - `Router` - Ready to be served
pub fn build(state: AppState) -> Router {
    let (api_router, api_doc) = router().split_for_parts();

    api_router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_doc))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
