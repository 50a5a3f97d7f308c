use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        group::{CreateGroupDto, GroupDto, MembershipDto, TransferStudentDto},
        student::StudentSummaryDto,
    },
    server::{
        error::AppError, model::group::CreateGroupParam, service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "groups";

/// Create a new group.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Name and optional description of the new group
///
/// # Returns
/// - `201 Created` - The created group
/// - `400 Bad Request` - A group with this name already exists
/// - `422 Unprocessable Entity` - Payload failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 400, description = "Group name already taken", body = ErrorDto),
        (status = 422, description = "Invalid group data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = GroupService::new(&state.db);

    let group = service.create(CreateGroupParam::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// List all groups with their students.
#[utoipa::path(
    get,
    path = "/api/v1/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let groups: Vec<GroupDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|g| g.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(groups)))
}

/// Get a group by ID.
#[utoipa::path(
    get,
    path = "/api/v1/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service.get_by_id(group_id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// List the students in a group.
///
/// # Returns
/// - `200 OK` - Members of the group, possibly empty
/// - `404 Not Found` - No group with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/groups/{group_id}/students",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group members", body = Vec<StudentSummaryDto>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_students(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let students: Vec<StudentSummaryDto> = service
        .get_students(group_id)
        .await?
        .into_iter()
        .map(|s| s.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(students)))
}

/// Delete a group.
///
/// Member students lose the membership but are not deleted.
#[utoipa::path(
    delete,
    path = "/api/v1/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted group", body = MessageDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let message = service.delete(group_id).await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}

/// Add a student to a group.
///
/// Adding a student that is already a member succeeds without creating a second membership.
///
/// # Returns
/// - `200 OK` - Student is a member of the group
/// - `404 Not Found` - Student or group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/groups/add-student",
    tag = GROUP_TAG,
    request_body = MembershipDto,
    responses(
        (status = 200, description = "Successfully added student to group", body = MessageDto),
        (status = 404, description = "Student or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_student_to_group(
    State(state): State<AppState>,
    Json(payload): Json<MembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let message = service
        .add_student(payload.student_id, payload.group_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}

/// Remove a student from a group.
#[utoipa::path(
    post,
    path = "/api/v1/groups/remove-student",
    tag = GROUP_TAG,
    request_body = MembershipDto,
    responses(
        (status = 200, description = "Successfully removed student from group", body = MessageDto),
        (status = 404, description = "Student is not a member of the group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_student_from_group(
    State(state): State<AppState>,
    Json(payload): Json<MembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let message = service
        .remove_student(payload.student_id, payload.group_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}

/// Transfer a student from one group to another.
///
/// The student leaves the source group (if it was a member) and joins the target group.
/// The two steps are not atomic; if joining fails the student stays out of the source group.
///
/// # Returns
/// - `200 OK` - Student is now a member of the target group
/// - `404 Not Found` - Student or target group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/groups/transfer-student",
    tag = GROUP_TAG,
    request_body = TransferStudentDto,
    responses(
        (status = 200, description = "Successfully transferred student", body = MessageDto),
        (status = 404, description = "Student or target group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer_student(
    State(state): State<AppState>,
    Json(payload): Json<TransferStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let message = service
        .transfer_student(
            payload.student_id,
            payload.from_group_id,
            payload.to_group_id,
        )
        .await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
