use crate::dtos::student::{AcademicRecordResponse, StudentProfileRequest, StudentProfileResponse};
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{Extension, Json, extract::Path};
use database::services::enrollment::EnrollmentService;
use database::services::student_profile::{StudentProfileInput, StudentProfileService};
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List all student profiles
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "List of student profiles", body = Vec<StudentProfileResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn get_students(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<Vec<StudentProfileResponse>>, ApiError> {
    let profiles = StudentProfileService::list(&db).await?;

    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// Get a specific student profile by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student profile ID")
    ),
    responses(
        (status = 200, description = "Student profile found", body = StudentProfileResponse),
        (status = 404, description = "Student profile not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn get_student_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentProfileResponse>, ApiError> {
    let profile = StudentProfileService::get(&db, id).await?;

    Ok(Json(profile.into()))
}

/// Register a student profile
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentProfileRequest,
    responses(
        (status = 201, description = "Student profile created", body = StudentProfileResponse),
        (status = 400, description = "Invalid profile data"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn create_student(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<StudentProfileRequest>,
) -> Result<(StatusCode, Json<StudentProfileResponse>), ApiError> {
    let input = StudentProfileInput {
        full_name: request.full_name,
        email: request.email,
        enrollment_year: request.enrollment_year,
    };

    let profile = StudentProfileService::create(&db, input).await?;

    Ok((StatusCode::CREATED, Json(profile.into())))
}

/// List the academic records of one student, most recent first
#[utoipa::path(
    get,
    path = "/students/{id}/records",
    params(
        ("id" = Uuid, Path, description = "Student profile ID")
    ),
    responses(
        (status = 200, description = "Academic records of the student", body = Vec<AcademicRecordResponse>),
        (status = 404, description = "Student profile not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn get_student_records(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AcademicRecordResponse>>, ApiError> {
    StudentProfileService::get(&db, id).await?;
    let records = EnrollmentService::records_by_student(&db, id).await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}
