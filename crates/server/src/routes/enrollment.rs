use crate::dtos::enrollment::{
    CompleteEnrollmentRequest, EnrollmentQueryParams, EnrollmentRequest, EnrollmentResponse,
};
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use database::services::enrollment::EnrollmentService;
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List the enrollments of one student, optionally scoped to a semester
#[utoipa::path(
    get,
    path = "/enrollments",
    params(EnrollmentQueryParams),
    responses(
        (status = 200, description = "Enrollments of the student", body = Vec<EnrollmentResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn get_enrollments(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<EnrollmentQueryParams>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let enrollments =
        EnrollmentService::list_by_student(&db, params.student_profile_id, params.semester_id)
            .await?;

    Ok(Json(enrollments.into_iter().map(Into::into).collect()))
}

/// Enroll a student into a course for a semester
#[utoipa::path(
    post,
    path = "/enrollments",
    request_body = EnrollmentRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 400, description = "Unknown student, course, or semester"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Student already enrolled"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn create_enrollment(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<EnrollmentRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    let enrollment = EnrollmentService::enroll(
        &db,
        request.student_profile_id,
        request.course_id,
        request.semester_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

/// Withdraw an active enrollment
#[utoipa::path(
    post,
    path = "/enrollments/{id}/withdraw",
    params(
        ("id" = Uuid, Path, description = "Enrollment ID")
    ),
    responses(
        (status = 200, description = "Enrollment withdrawn", body = EnrollmentResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Enrollment not found"),
        (status = 409, description = "Enrollment is not active"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn withdraw_enrollment(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let enrollment = EnrollmentService::withdraw(&db, id).await?;

    Ok(Json(enrollment.into()))
}

/// Complete an enrollment with a final grade; writes the academic record
#[utoipa::path(
    post,
    path = "/enrollments/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Enrollment ID")
    ),
    request_body = CompleteEnrollmentRequest,
    responses(
        (status = 200, description = "Enrollment completed", body = EnrollmentResponse),
        (status = 400, description = "Invalid grade data"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Enrollment not found"),
        (status = 409, description = "Enrollment is not active"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn complete_enrollment(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteEnrollmentRequest>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let enrollment =
        EnrollmentService::complete(&db, id, request.grade, request.grade_points).await?;

    Ok(Json(enrollment.into()))
}
