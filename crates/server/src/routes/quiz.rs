use crate::dtos::quiz::{
    AttemptQueryParams, AttemptResponse, QuizRequest, QuizResponse, StartAttemptRequest,
    SubmitAttemptRequest,
};
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::Utc;
use database::entities::quiz_attempt;
use database::error::ServiceError;
use database::services::quiz::{QuizInput, QuizService};
use database::services::quiz_attempt::QuizAttemptService;
use models::quiz_data::{AttemptAnalysis, MarkedAnswer, Question};
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List all quizzes
#[utoipa::path(
    get,
    path = "/quizzes",
    responses(
        (status = 200, description = "List of quizzes", body = Vec<QuizResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Quizzes"
)]
pub async fn get_quizzes(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<Vec<QuizResponse>>, ApiError> {
    let quizzes = QuizService::list(&db).await?;

    Ok(Json(quizzes.into_iter().map(Into::into).collect()))
}

/// Get a specific quiz by ID
#[utoipa::path(
    get,
    path = "/quizzes/{id}",
    params(
        ("id" = Uuid, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz found", body = QuizResponse),
        (status = 404, description = "Quiz not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Quizzes"
)]
pub async fn get_quiz_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResponse>, ApiError> {
    let quiz = QuizService::get(&db, id).await?;

    Ok(Json(quiz.into()))
}

/// Create a quiz with its question set
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 201, description = "Quiz created", body = QuizResponse),
        (status = 400, description = "Invalid quiz data"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Quizzes"
)]
pub async fn create_quiz(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<QuizRequest>,
) -> Result<(StatusCode, Json<QuizResponse>), ApiError> {
    let input = QuizInput {
        course_id: request.course_id,
        title: request.title,
        time_limit_minutes: request.time_limit_minutes,
        pass_threshold: request.pass_threshold,
        questions: request.questions.into_iter().map(Into::into).collect(),
    };

    let quiz = QuizService::create(&db, input).await?;

    Ok((StatusCode::CREATED, Json(quiz.into())))
}

/// Start an attempt for a quiz
#[utoipa::path(
    post,
    path = "/quizzes/attempts/start",
    request_body = StartAttemptRequest,
    responses(
        (status = 201, description = "Attempt started", body = AttemptResponse),
        (status = 400, description = "Unknown quiz or student"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Quizzes"
)]
pub async fn start_attempt(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<StartAttemptRequest>,
) -> Result<(StatusCode, Json<AttemptResponse>), ApiError> {
    let attempt =
        QuizAttemptService::start(&db, request.quiz_id, request.student_profile_id).await?;

    Ok((StatusCode::CREATED, Json(convert_to_attempt_response(attempt)?)))
}

/// Submit answers for an attempt; grading happens against the question
/// snapshot taken at start, and late submissions are rejected
#[utoipa::path(
    post,
    path = "/quizzes/attempts/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Attempt ID")
    ),
    request_body = SubmitAttemptRequest,
    responses(
        (status = 200, description = "Attempt graded", body = AttemptResponse),
        (status = 404, description = "Attempt not found"),
        (status = 409, description = "Attempt already closed or past its deadline"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Quizzes"
)]
pub async fn submit_attempt(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitAttemptRequest>,
) -> Result<Json<AttemptResponse>, ApiError> {
    let answers = request.answers.into_iter().map(Into::into).collect();
    let attempt = QuizAttemptService::submit(&db, id, answers, Utc::now()).await?;

    Ok(Json(convert_to_attempt_response(attempt)?))
}

/// Get a specific attempt by ID
#[utoipa::path(
    get,
    path = "/quizzes/attempts/{id}",
    params(
        ("id" = Uuid, Path, description = "Attempt ID")
    ),
    responses(
        (status = 200, description = "Attempt found", body = AttemptResponse),
        (status = 404, description = "Attempt not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Quizzes"
)]
pub async fn get_attempt_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<AttemptResponse>, ApiError> {
    let attempt = QuizAttemptService::get(&db, id).await?;

    Ok(Json(convert_to_attempt_response(attempt)?))
}

/// List the attempts of one student, newest first
#[utoipa::path(
    get,
    path = "/quizzes/attempts",
    params(AttemptQueryParams),
    responses(
        (status = 200, description = "Attempts of the student", body = Vec<AttemptResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Quizzes"
)]
pub async fn get_attempts(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<AttemptQueryParams>,
) -> Result<Json<Vec<AttemptResponse>>, ApiError> {
    let attempts = QuizAttemptService::list_by_student(&db, params.student_profile_id).await?;

    let responses = attempts
        .into_iter()
        .map(convert_to_attempt_response)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(responses))
}

/// Helper function to convert a stored attempt into its API response
fn convert_to_attempt_response(
    attempt: quiz_attempt::Model,
) -> Result<AttemptResponse, ApiError> {
    let questions: Vec<Question> =
        serde_json::from_value(attempt.questions).map_err(ServiceError::from)?;

    let answers = attempt
        .answers
        .map(serde_json::from_value::<Vec<MarkedAnswer>>)
        .transpose()
        .map_err(ServiceError::from)?
        .map(|marked| marked.into_iter().map(Into::into).collect());

    let analysis = attempt
        .analysis
        .map(serde_json::from_value::<AttemptAnalysis>)
        .transpose()
        .map_err(ServiceError::from)?
        .map(Into::into);

    Ok(AttemptResponse {
        id: attempt.id.to_string(),
        quiz_id: attempt.quiz_id.to_string(),
        student_profile_id: attempt.student_profile_id.to_string(),
        started_at: attempt.started_at,
        ended_at: attempt.ended_at,
        status: attempt.status,
        score: attempt.score,
        is_passed: attempt.is_passed,
        questions: questions.into_iter().map(Into::into).collect(),
        answers,
        analysis,
    })
}
