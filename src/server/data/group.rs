//! Group data repository for database operations.
//!
//! This module provides the `GroupRepository` for creating, reading and deleting groups.
//! Groups are returned hydrated with their member students, assembled from explicit
//! membership ID lookups in the same way as `StudentRepository` hydrates groups.

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
    model::group::{CreateGroupParam, Group},
    util::db::map_unique_violation,
};

/// Repository providing database operations for groups.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group.
    ///
    /// # Arguments
    /// - `param` - Name and optional description of the group
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with no students
    /// - `Err(AppError::DomainErr(Conflict))` - A group with this name already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, AppError> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                DomainError::Conflict {
                    kind: EntityKind::Group,
                    field: "name",
                },
            )
        })?;

        Ok(Group::from_entity(entity, Vec::new()))
    }

    /// Finds a group by ID together with its students.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group found
    /// - `Ok(None)` - No group with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let Some(entity) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let students = self.students_of(id).await?;

        Ok(Some(Group::from_entity(entity, students)))
    }

    /// Gets all groups with their students, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let groups = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        let mut memberships = MembershipRepository::new(self.db).get_all().await?;
        memberships.sort_by_key(|m| (m.group_id, m.student_id));

        let mut student_ids: Vec<i32> = memberships.iter().map(|m| m.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();

        let students_map: HashMap<i32, entity::student::Model> = if !student_ids.is_empty() {
            entity::prelude::Student::find()
                .filter(entity::student::Column::Id.is_in(student_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        } else {
            HashMap::new()
        };

        let mut students_by_group: HashMap<i32, Vec<entity::student::Model>> = HashMap::new();
        for membership in memberships {
            if let Some(student) = students_map.get(&membership.student_id) {
                students_by_group
                    .entry(membership.group_id)
                    .or_default()
                    .push(student.clone());
            }
        }

        Ok(groups
            .into_iter()
            .map(|group| {
                let students = students_by_group.remove(&group.id).unwrap_or_default();
                Group::from_entity(group, students)
            })
            .collect())
    }

    /// Deletes a group along with all of its memberships.
    ///
    /// Member students are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The group existed and was deleted
    /// - `Ok(false)` - No group with that ID
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::StudentGroup::delete_many()
            .filter(entity::student_group::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Group::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the student rows in the group, ordered by student ID.
    pub async fn students_of(&self, group_id: i32) -> Result<Vec<entity::student::Model>, DbErr> {
        let student_ids = MembershipRepository::new(self.db)
            .student_ids_of(group_id)
            .await?;

        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(student_ids))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }
}
