use sea_orm::{DbErr, SqlErr};

use crate::server::error::{domain::DomainError, AppError};

/// Maps a unique-constraint violation to the given conflict, passing any other
/// database error through unchanged.
///
/// # Arguments
/// - `err` - Error returned by an insert
/// - `conflict` - Domain error describing which unique field was violated
///
/// # Returns
/// - `AppError::DomainErr(conflict)` - The insert was rejected by a unique constraint
/// - `AppError::DbErr(err)` - Any other failure
pub fn map_unique_violation(err: DbErr, conflict: DomainError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict.into(),
        _ => err.into(),
    }
}

/// Whether the error is a foreign key violation, i.e. a referenced row is missing.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
