use crate::dtos::period::{PeriodRequest, PeriodResponse};
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{Extension, Json, extract::Path};
use database::services::period::{PeriodInput, PeriodService};
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List all periods
#[utoipa::path(
    get,
    path = "/periods",
    responses(
        (status = 200, description = "List of periods", body = Vec<PeriodResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Periods"
)]
pub async fn get_periods(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<Vec<PeriodResponse>>, ApiError> {
    let periods = PeriodService::list(&db).await?;

    Ok(Json(periods.into_iter().map(Into::into).collect()))
}

/// Get a specific period by ID
#[utoipa::path(
    get,
    path = "/periods/{id}",
    params(
        ("id" = Uuid, Path, description = "Period ID")
    ),
    responses(
        (status = 200, description = "Period found", body = PeriodResponse),
        (status = 404, description = "Period not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Periods"
)]
pub async fn get_period_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<PeriodResponse>, ApiError> {
    let period = PeriodService::get(&db, id).await?;

    Ok(Json(period.into()))
}

/// List the periods of one semester in weekday order
#[utoipa::path(
    get,
    path = "/periods/semester/{semester_id}",
    params(
        ("semester_id" = Uuid, Path, description = "Semester ID")
    ),
    responses(
        (status = 200, description = "Periods of the semester", body = Vec<PeriodResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Periods"
)]
pub async fn get_periods_by_semester(
    Extension(db): Extension<DatabaseConnection>,
    Path(semester_id): Path<Uuid>,
) -> Result<Json<Vec<PeriodResponse>>, ApiError> {
    let periods = PeriodService::find_by_semester(&db, semester_id).await?;

    Ok(Json(periods.into_iter().map(Into::into).collect()))
}

/// Create a period within a semester
#[utoipa::path(
    post,
    path = "/periods",
    request_body = PeriodRequest,
    responses(
        (status = 201, description = "Period created", body = PeriodResponse),
        (status = 400, description = "Invalid period data"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Periods"
)]
pub async fn create_period(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<PeriodRequest>,
) -> Result<(StatusCode, Json<PeriodResponse>), ApiError> {
    let period = PeriodService::create(&db, to_input(request)).await?;

    Ok((StatusCode::CREATED, Json(period.into())))
}

/// Update a period
#[utoipa::path(
    put,
    path = "/periods/{id}",
    params(
        ("id" = Uuid, Path, description = "Period ID")
    ),
    request_body = PeriodRequest,
    responses(
        (status = 200, description = "Period updated", body = PeriodResponse),
        (status = 400, description = "Invalid period data"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Period not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Periods"
)]
pub async fn update_period(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
    Json(request): Json<PeriodRequest>,
) -> Result<Json<PeriodResponse>, ApiError> {
    let period = PeriodService::update(&db, id, to_input(request)).await?;

    Ok(Json(period.into()))
}

/// Delete a period
#[utoipa::path(
    delete,
    path = "/periods/{id}",
    params(
        ("id" = Uuid, Path, description = "Period ID")
    ),
    responses(
        (status = 204, description = "Period deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Period not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Periods"
)]
pub async fn delete_period(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    PeriodService::delete(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_input(request: PeriodRequest) -> PeriodInput {
    PeriodInput {
        name: request.name,
        start_time: request.start_time,
        end_time: request.end_time,
        day_of_week: request.day_of_week,
        semester_id: request.semester_id,
    }
}
