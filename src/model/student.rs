use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::group::GroupSummaryDto;

#[derive(Serialize, Deserialize, Validate, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email, length(max = 200))]
    pub email: String,
}

/// Student with the groups it belongs to.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub groups: Vec<GroupSummaryDto>,
}

/// Student without its group memberships, as listed inside a group.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentSummaryDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
