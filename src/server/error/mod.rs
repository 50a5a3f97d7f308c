//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod domain;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, domain::DomainError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Every variant uses `#[from]` for automatic
/// error conversion. `DomainError` handles its own response mapping.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Not-found or conflict outcome of a roster operation.
    ///
    /// Delegates to `DomainError::into_response()` for status code mapping.
    #[error(transparent)]
    DomainErr(#[from] DomainError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request payload failed field validation.
    ///
    /// Results in 422 Unprocessable Entity listing the offending fields.
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    /// I/O error while binding or serving the listener.
    ///
    /// Only occurs during startup and shutdown.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Domain errors delegate to their own response handling. Infrastructure errors are
/// logged with full details but return a generic message to the client.
///
/// # Returns
/// - 400 Bad Request - For `DomainError::Conflict`
/// - 404 Not Found - For the not-found domain errors
/// - 422 Unprocessable Entity - For `ValidationErr`
/// - 500 Internal Server Error - For `DbErr`, `ConfigErr` and `IoErr`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::DomainErr(err) => err.into_response(),
            Self::ValidationErr(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: format!("Invalid request: {}", errors),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
