//! Group domain models and parameters.

use crate::{
    model::group::{CreateGroupDto, GroupDto, GroupSummaryDto},
    server::model::student::StudentSummary,
};

/// Group with its current member students.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Member students, ordered by student ID.
    pub students: Vec<StudentSummary>,
}

impl Group {
    /// Builds a hydrated group from its entity row and the rows of its members.
    ///
    /// # Arguments
    /// - `entity` - The group row
    /// - `students` - Student rows that are members of the group
    pub fn from_entity(entity: entity::group::Model, students: Vec<entity::student::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            students: students
                .into_iter()
                .map(StudentSummary::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            description: self.description,
            students: self.students.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}

/// Group fields without members, as listed on a student.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl GroupSummary {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> GroupSummaryDto {
        GroupSummaryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for creating a group.
#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
    pub description: Option<String>,
}

impl From<CreateGroupDto> for CreateGroupParam {
    fn from(dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
