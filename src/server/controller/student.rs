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
        student::{CreateStudentDto, StudentDto},
    },
    server::{
        error::AppError, model::student::CreateStudentParam, service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "students";

/// Create a new student.
///
/// Validates the payload and stores the student with an empty group set. The e-mail
/// address must not belong to another student.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - First name, last name and e-mail of the new student
///
/// # Returns
/// - `201 Created` - The created student
/// - `400 Bad Request` - A student with this e-mail already exists
/// - `422 Unprocessable Entity` - Payload failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "E-mail already registered", body = ErrorDto),
        (status = 422, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = StudentService::new(&state.db);

    let student = service.create(CreateStudentParam::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// List all students with their groups.
#[utoipa::path(
    get,
    path = "/api/v1/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students: Vec<StudentDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|s| s.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(students)))
}

/// Get a student by ID.
///
/// # Returns
/// - `200 OK` - The student with the groups it belongs to
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.get_by_id(student_id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// Removes the student from all of its groups before deleting it. The groups are kept.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/students/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let message = service.delete(student_id).await?;

    Ok((StatusCode::OK, Json(MessageDto { message })))
}
