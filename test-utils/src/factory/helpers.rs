//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student and a group with the student already a member of it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, group))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_in_group(
    db: &DatabaseConnection,
) -> Result<(entity::student::Model, entity::group::Model), DbErr> {
    let student = crate::factory::student::create_student(db).await?;
    let group = crate::factory::group::create_group(db).await?;
    crate::factory::student_group::create_membership(db, student.id, group.id).await?;

    Ok((student, group))
}
