use crate::dtos::course::{CourseRequest, CourseResponse};
use crate::dtos::quiz::QuizResponse;
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{Extension, Json, extract::Path};
use database::services::course::{CourseInput, CourseService};
use database::services::quiz::QuizService;
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List all courses
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "List of courses", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn get_courses(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = CourseService::list(&db).await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::get(&db, id).await?;

    Ok(Json(course.into()))
}

/// List the quizzes of one course
#[utoipa::path(
    get,
    path = "/courses/{id}/quizzes",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Quizzes of the course", body = Vec<QuizResponse>),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn get_course_quizzes(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<QuizResponse>>, ApiError> {
    CourseService::get(&db, id).await?;
    let quizzes = QuizService::list_by_course(&db, id).await?;

    Ok(Json(quizzes.into_iter().map(Into::into).collect()))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid course data"),
        (status = 403, description = "Admin role required"),
        (status = 409, description = "Course code already exists"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<CourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let input = CourseInput {
        code: request.code,
        title: request.title,
        description: request.description,
        credit_hours: request.credit_hours,
    };

    let course = CourseService::create(&db, input).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}
