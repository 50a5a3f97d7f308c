use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Success body for operations that don't return an entity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServiceInfoDto {
    pub name: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthDto {
    pub status: String,
    /// `"connected"` or `"error: <reason>"`
    pub database: String,
}
