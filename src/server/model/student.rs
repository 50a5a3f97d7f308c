//! Student domain models and parameters.

use crate::{
    model::student::{CreateStudentDto, StudentDto, StudentSummaryDto},
    server::model::group::GroupSummary,
};

/// Student with the groups it currently belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Groups the student is a member of, ordered by group ID.
    pub groups: Vec<GroupSummary>,
}

impl Student {
    /// Builds a hydrated student from its entity row and the rows of its groups.
    ///
    /// # Arguments
    /// - `entity` - The student row
    /// - `groups` - Group rows the student is a member of
    pub fn from_entity(entity: entity::student::Model, groups: Vec<entity::group::Model>) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            groups: groups.into_iter().map(GroupSummary::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            groups: self.groups.into_iter().map(|g| g.into_dto()).collect(),
        }
    }
}

/// Student fields without memberships, as listed inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl StudentSummary {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> StudentSummaryDto {
        StudentSummaryDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// Parameters for creating a student.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<CreateStudentDto> for CreateStudentParam {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}
