use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{HealthDto, ServiceInfoDto},
    server::state::AppState,
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Service name and version.
#[utoipa::path(
    get,
    path = "/",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Service information", body = ServiceInfoDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(ServiceInfoDto {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Liveness check including a database ping.
///
/// Always answers 200 while the process is serving; the `database` field reports
/// whether the connection pool could reach the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Service health", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.ping().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            format!("error: {}", e)
        }
    };

    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
            database,
        }),
    )
}
