//! Membership factory for linking students to groups.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts a membership row for the given student and group.
///
/// Both referenced rows must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - ID of the student
/// - `group_id` - ID of the group
///
/// # Returns
/// - `Ok(entity::student_group::Model)` - The inserted membership
/// - `Err(DbErr)` - Database error during insertion (including a duplicate pair)
pub async fn create_membership(
    db: &DatabaseConnection,
    student_id: i32,
    group_id: i32,
) -> Result<entity::student_group::Model, DbErr> {
    entity::prelude::StudentGroup::insert(entity::student_group::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        group_id: ActiveValue::Set(group_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(entity::student_group::Model {
        student_id,
        group_id,
    })
}
