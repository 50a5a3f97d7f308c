//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for creating, reading and deleting
//! student records. Students are returned hydrated with their groups: membership IDs are
//! looked up explicitly through the association table and the group rows fetched in one
//! query, so no relation is ever loaded implicitly.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::membership::MembershipRepository,
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::student::{CreateStudentParam, Student},
    util::db::map_unique_violation,
};

/// Repository providing database operations for students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student.
    ///
    /// # Arguments
    /// - `param` - First name, last name and e-mail of the student
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with an empty group set
    /// - `Err(AppError::DomainErr(Conflict))` - A student with this e-mail already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        let entity = entity::student::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                DomainError::Conflict {
                    kind: EntityKind::Student,
                    field: "email",
                },
            )
        })?;

        Ok(Student::from_entity(entity, Vec::new()))
    }

    /// Finds a student by ID together with its groups.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let Some(entity) = entity::prelude::Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let groups = self.groups_of(id).await?;

        Ok(Some(Student::from_entity(entity, groups)))
    }

    /// Gets all students with their groups, ordered by ID.
    ///
    /// Runs three queries regardless of the number of students: students, memberships
    /// and the referenced groups.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        let memberships = MembershipRepository::new(self.db).get_all().await?;

        let mut group_ids: Vec<i32> = memberships.iter().map(|m| m.group_id).collect();
        group_ids.sort_unstable();
        group_ids.dedup();

        let groups_map: HashMap<i32, entity::group::Model> = if !group_ids.is_empty() {
            entity::prelude::Group::find()
                .filter(entity::group::Column::Id.is_in(group_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, g))
                .collect()
        } else {
            HashMap::new()
        };

        // Memberships are ordered by (student_id, group_id) so each list is sorted by group ID
        let mut groups_by_student: HashMap<i32, Vec<entity::group::Model>> = HashMap::new();
        for membership in memberships {
            if let Some(group) = groups_map.get(&membership.group_id) {
                groups_by_student
                    .entry(membership.student_id)
                    .or_default()
                    .push(group.clone());
            }
        }

        Ok(students
            .into_iter()
            .map(|student| {
                let groups = groups_by_student.remove(&student.id).unwrap_or_default();
                Student::from_entity(student, groups)
            })
            .collect())
    }

    /// Deletes a student along with all of its memberships.
    ///
    /// Membership rows and the student row are removed in one transaction; the groups
    /// themselves are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The student existed and was deleted
    /// - `Ok(false)` - No student with that ID
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::StudentGroup::delete_many()
            .filter(entity::student_group::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Student::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the group rows the student belongs to, ordered by group ID.
    pub async fn groups_of(&self, student_id: i32) -> Result<Vec<entity::group::Model>, DbErr> {
        let group_ids = MembershipRepository::new(self.db)
            .group_ids_of(student_id)
            .await?;

        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(group_ids))
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await
    }
}
