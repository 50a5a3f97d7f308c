use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::student::StudentSummaryDto;

#[derive(Serialize, Deserialize, Validate, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateGroupDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Group with its member students.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub students: Vec<StudentSummaryDto>,
}

/// Group without its members, as listed on a student.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Body of the add-student and remove-student endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MembershipDto {
    pub student_id: i32,
    pub group_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TransferStudentDto {
    pub student_id: i32,
    pub from_group_id: i32,
    pub to_group_id: i32,
}
