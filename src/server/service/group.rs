//! Group service covering group CRUD and membership changes.
//!
//! Membership operations live here rather than on the student service since every one of
//! them is addressed through the `/groups` resource.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, membership::MembershipRepository},
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::{
        group::{CreateGroupParam, Group},
        student::StudentSummary,
    },
};

/// Group and membership operations over the shared connection pool.
pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new GroupService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group; a taken name surfaces as a conflict
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        let group = repo.create(param).await?;

        tracing::info!("Created group {} ({})", group.id, group.name);

        Ok(group)
    }

    /// Gets a group by ID with its students
    pub async fn get_by_id(&self, id: i32) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| group_not_found(id).into())
    }

    /// Gets all groups ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        let repo = GroupRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the members of a group
    ///
    /// # Returns
    /// - `Ok(Vec<StudentSummary>)` - Members ordered by student ID, possibly empty
    /// - `Err(AppError::DomainErr(NotFound))` - The group does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_students(&self, group_id: i32) -> Result<Vec<StudentSummary>, AppError> {
        let group = self.get_by_id(group_id).await?;

        Ok(group.students)
    }

    /// Deletes a group and its memberships, returning a confirmation message
    pub async fn delete(&self, id: i32) -> Result<String, AppError> {
        let repo = GroupRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(group_not_found(id).into());
        }

        tracing::info!("Deleted group {}", id);

        Ok("Group deleted successfully".to_string())
    }

    /// Adds a student to a group. Adding an existing member succeeds without change.
    pub async fn add_student(&self, student_id: i32, group_id: i32) -> Result<String, AppError> {
        let repo = MembershipRepository::new(self.db);

        if !repo.add(student_id, group_id).await? {
            return Err(DomainError::StudentOrGroupNotFound {
                student_id,
                group_id,
            }
            .into());
        }

        tracing::info!("Added student {} to group {}", student_id, group_id);

        Ok(format!("Student {} added to group {}", student_id, group_id))
    }

    /// Removes a student from a group
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message
    /// - `Err(AppError::DomainErr(MembershipNotFound))` - The student is not in the group,
    ///   which includes either of them not existing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_student(
        &self,
        student_id: i32,
        group_id: i32,
    ) -> Result<String, AppError> {
        let repo = MembershipRepository::new(self.db);

        if !repo.remove(student_id, group_id).await? {
            return Err(DomainError::MembershipNotFound {
                student_id,
                group_id,
            }
            .into());
        }

        tracing::info!("Removed student {} from group {}", student_id, group_id);

        Ok(format!(
            "Student {} removed from group {}",
            student_id, group_id
        ))
    }

    /// Moves a student from one group to another.
    ///
    /// The student is removed from `from_group_id` first; if it was not a member there the
    /// transfer still continues. It is then added to `to_group_id`. The two steps are not
    /// atomic: when the add fails the removal from the source group is kept.
    ///
    /// # Arguments
    /// - `student_id` - Student to move
    /// - `from_group_id` - Group the student leaves
    /// - `to_group_id` - Group the student joins
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message
    /// - `Err(AppError::DomainErr(TransferFailed))` - The student or target group does not exist
    /// - `Err(AppError::DbErr)` - Database error in either step
    pub async fn transfer_student(
        &self,
        student_id: i32,
        from_group_id: i32,
        to_group_id: i32,
    ) -> Result<String, AppError> {
        let repo = MembershipRepository::new(self.db);

        if !repo.remove(student_id, from_group_id).await? {
            tracing::debug!(
                "Student {} was not a member of group {}, continuing transfer",
                student_id,
                from_group_id
            );
        }

        if !repo.add(student_id, to_group_id).await? {
            return Err(DomainError::TransferFailed {
                student_id,
                from_group_id,
                to_group_id,
            }
            .into());
        }

        tracing::info!(
            "Transferred student {} from group {} to group {}",
            student_id,
            from_group_id,
            to_group_id
        );

        Ok(format!(
            "Student {} transferred from group {} to group {}",
            student_id, from_group_id, to_group_id
        ))
    }
}

fn group_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        kind: EntityKind::Group,
        id,
    }
}
