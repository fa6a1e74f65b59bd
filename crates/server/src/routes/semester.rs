use crate::dtos::semester::{SemesterRequest, SemesterResponse};
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{Extension, Json, extract::Path};
use database::services::semester::{SemesterInput, SemesterService};
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List all semesters, newest first
#[utoipa::path(
    get,
    path = "/semesters",
    responses(
        (status = 200, description = "List of semesters", body = Vec<SemesterResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn get_semesters(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<Vec<SemesterResponse>>, ApiError> {
    let semesters = SemesterService::list(&db).await?;

    Ok(Json(semesters.into_iter().map(Into::into).collect()))
}

/// Get the currently active semester
#[utoipa::path(
    get,
    path = "/semesters/active",
    responses(
        (status = 200, description = "Active semester", body = SemesterResponse),
        (status = 404, description = "No active semester found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn get_active_semester(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<SemesterResponse>, ApiError> {
    let semester = SemesterService::get_active(&db).await?;

    Ok(Json(semester.into()))
}

/// Get a specific semester by ID
#[utoipa::path(
    get,
    path = "/semesters/{id}",
    params(
        ("id" = Uuid, Path, description = "Semester ID")
    ),
    responses(
        (status = 200, description = "Semester found", body = SemesterResponse),
        (status = 404, description = "Semester not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn get_semester_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<SemesterResponse>, ApiError> {
    let semester = SemesterService::get(&db, id).await?;

    Ok(Json(semester.into()))
}

/// Create a semester; activating it deactivates every other semester
#[utoipa::path(
    post,
    path = "/semesters",
    request_body = SemesterRequest,
    responses(
        (status = 201, description = "Semester created", body = SemesterResponse),
        (status = 400, description = "Invalid semester data"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn create_semester(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<SemesterRequest>,
) -> Result<(StatusCode, Json<SemesterResponse>), ApiError> {
    let semester = SemesterService::create(&db, to_input(request)).await?;

    Ok((StatusCode::CREATED, Json(semester.into())))
}

/// Update a semester; activating it deactivates every other semester
#[utoipa::path(
    put,
    path = "/semesters/{id}",
    params(
        ("id" = Uuid, Path, description = "Semester ID")
    ),
    request_body = SemesterRequest,
    responses(
        (status = 200, description = "Semester updated", body = SemesterResponse),
        (status = 400, description = "Invalid semester data"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Semester not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn update_semester(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
    Json(request): Json<SemesterRequest>,
) -> Result<Json<SemesterResponse>, ApiError> {
    let semester = SemesterService::update(&db, id, to_input(request)).await?;

    Ok(Json(semester.into()))
}

/// Delete a semester; the active semester cannot be deleted
#[utoipa::path(
    delete,
    path = "/semesters/{id}",
    params(
        ("id" = Uuid, Path, description = "Semester ID")
    ),
    responses(
        (status = 204, description = "Semester deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Semester not found"),
        (status = 409, description = "Semester is currently active"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Semesters"
)]
pub async fn delete_semester(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    SemesterService::delete(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_input(request: SemesterRequest) -> SemesterInput {
    SemesterInput {
        name: request.name,
        start_date: request.start_date,
        end_date: request.end_date,
        is_active: request.is_active,
        academic_year: request.academic_year,
    }
}
