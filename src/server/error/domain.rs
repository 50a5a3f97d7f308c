use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Kind of roster entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Group,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("Student"),
            Self::Group => f.write_str("Group"),
        }
    }
}

/// Request-level failures of roster operations.
///
/// Absence is turned into one of the not-found variants by the service layer; conflicts
/// are raised by the data layer when a unique constraint rejects an insert.
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    /// A student or group with the given ID does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("{kind} with ID {id} not found")]
    NotFound {
        /// Which entity was looked up
        kind: EntityKind,
        /// The ID that was looked up
        id: i32,
    },

    /// Adding a membership failed because one of its sides does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Student {student_id} or group {group_id} not found")]
    StudentOrGroupNotFound { student_id: i32, group_id: i32 },

    /// The student is not a member of the group (or one of them does not exist).
    ///
    /// Results in a 404 Not Found response.
    #[error("Student {student_id} is not a member of group {group_id}")]
    MembershipNotFound { student_id: i32, group_id: i32 },

    /// The add step of a transfer failed because the student or target group is missing.
    ///
    /// The student may already have been removed from the source group.
    /// Results in a 404 Not Found response.
    #[error("Failed to transfer student {student_id} from group {from_group_id} to group {to_group_id}")]
    TransferFailed {
        student_id: i32,
        from_group_id: i32,
        to_group_id: i32,
    },

    /// A unique field already holds the submitted value.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{kind} with this {field} already exists")]
    Conflict {
        /// Which entity the insert targeted
        kind: EntityKind,
        /// The unique field that was violated
        field: &'static str,
    },
}

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. }
            | Self::StudentOrGroupNotFound { .. }
            | Self::MembershipNotFound { .. }
            | Self::TransferFailed { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts domain errors into HTTP responses.
///
/// The error's display message is returned to the client as-is since it never carries
/// more than entity kinds, IDs and field names.
///
/// # Returns
/// - 400 Bad Request - For `Conflict`
/// - 404 Not Found - For every not-found variant and `TransferFailed`
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
