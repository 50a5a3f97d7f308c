//! Membership repository for the student/group association table.
//!
//! This module provides the `MembershipRepository` for managing the many-to-many
//! relationship between students and groups. Besides adding and removing single
//! memberships it exposes the id lookups (`group_ids_of`, `student_ids_of`) the
//! student and group repositories use to hydrate their entities.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::util::db::is_foreign_key_violation;

/// Repository for student/group membership operations.
pub struct MembershipRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a student to a group.
    ///
    /// Verifies that both the student and the group exist, then inserts the membership
    /// row. Re-adding an existing membership is a no-op: the insert uses
    /// `ON CONFLICT DO NOTHING`, so two concurrent adds of the same pair both succeed
    /// and leave a single row.
    ///
    /// # Arguments
    /// - `student_id` - ID of the student
    /// - `group_id` - ID of the group
    ///
    /// # Returns
    /// - `Ok(true)` - The student is a member of the group (newly added or already present)
    /// - `Ok(false)` - The student or the group does not exist
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn add(&self, student_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let student = entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await?;
        let group = entity::prelude::Group::find_by_id(group_id)
            .one(self.db)
            .await?;

        if student.is_none() || group.is_none() {
            return Ok(false);
        }

        let result = entity::prelude::StudentGroup::insert(entity::student_group::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            group_id: ActiveValue::Set(group_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::student_group::Column::StudentId,
                entity::student_group::Column::GroupId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(true),
            // Either side was deleted between the existence check and the insert
            Err(err) if is_foreign_key_violation(&err) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Removes a student from a group.
    ///
    /// # Arguments
    /// - `student_id` - ID of the student
    /// - `group_id` - ID of the group
    ///
    /// # Returns
    /// - `Ok(true)` - The membership existed and was removed
    /// - `Ok(false)` - No such membership (including when either side doesn't exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove(&self, student_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudentGroup::delete_many()
            .filter(entity::student_group::Column::StudentId.eq(student_id))
            .filter(entity::student_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the IDs of all groups the student belongs to, in ascending order.
    pub async fn group_ids_of(&self, student_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::StudentGroup::find()
            .select_only()
            .column(entity::student_group::Column::GroupId)
            .filter(entity::student_group::Column::StudentId.eq(student_id))
            .order_by_asc(entity::student_group::Column::GroupId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets the IDs of all students in the group, in ascending order.
    pub async fn student_ids_of(&self, group_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::StudentGroup::find()
            .select_only()
            .column(entity::student_group::Column::StudentId)
            .filter(entity::student_group::Column::GroupId.eq(group_id))
            .order_by_asc(entity::student_group::Column::StudentId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets every membership row.
    ///
    /// Used when listing all students or groups so that the whole graph is hydrated
    /// with a fixed number of queries.
    pub async fn get_all(&self) -> Result<Vec<entity::student_group::Model>, DbErr> {
        entity::prelude::StudentGroup::find()
            .order_by_asc(entity::student_group::Column::StudentId)
            .order_by_asc(entity::student_group::Column::GroupId)
            .all(self.db)
            .await
    }
}
