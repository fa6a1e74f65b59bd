use crate::dtos::recommendation::{
    InteractionRequest, RatingRequest, RecommendationQueryParams, RecommendationRequest,
    RecommendationResponse,
};
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use database::services::recommendation::{RecommendationInput, RecommendationService};
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List the recommendations of one student, most relevant first
#[utoipa::path(
    get,
    path = "/recommendations",
    params(RecommendationQueryParams),
    responses(
        (status = 200, description = "Recommendations of the student", body = Vec<RecommendationResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Recommendations"
)]
pub async fn get_recommendations(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<RecommendationQueryParams>,
) -> Result<Json<Vec<RecommendationResponse>>, ApiError> {
    let recommendations =
        RecommendationService::list_by_student(&db, params.student_profile_id).await?;

    Ok(Json(recommendations.into_iter().map(Into::into).collect()))
}

/// Get a specific recommendation by ID
#[utoipa::path(
    get,
    path = "/recommendations/{id}",
    params(
        ("id" = Uuid, Path, description = "Recommendation ID")
    ),
    responses(
        (status = 200, description = "Recommendation found", body = RecommendationResponse),
        (status = 404, description = "Recommendation not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Recommendations"
)]
pub async fn get_recommendation_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let recommendation = RecommendationService::get(&db, id).await?;

    Ok(Json(recommendation.into()))
}

/// Register a generated recommendation for a student
#[utoipa::path(
    post,
    path = "/recommendations",
    request_body = RecommendationRequest,
    responses(
        (status = 201, description = "Recommendation created", body = RecommendationResponse),
        (status = 400, description = "Invalid recommendation data"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Recommendations"
)]
pub async fn create_recommendation(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<RecommendationRequest>,
) -> Result<(StatusCode, Json<RecommendationResponse>), ApiError> {
    let input = RecommendationInput {
        student_profile_id: request.student_profile_id,
        learning_resource_id: request.learning_resource_id,
        course_id: request.course_id,
        relevance_score: request.relevance_score,
    };

    let recommendation = RecommendationService::create(&db, input).await?;

    Ok((StatusCode::CREATED, Json(recommendation.into())))
}

/// Record a view/save/complete interaction against a recommendation
#[utoipa::path(
    post,
    path = "/recommendations/{id}/interactions",
    params(
        ("id" = Uuid, Path, description = "Recommendation ID")
    ),
    request_body = InteractionRequest,
    responses(
        (status = 200, description = "Interaction recorded", body = RecommendationResponse),
        (status = 400, description = "Unknown interaction type"),
        (status = 404, description = "Recommendation not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Recommendations"
)]
pub async fn record_interaction(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
    Json(request): Json<InteractionRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let kind = RecommendationService::parse_interaction(&request.interaction_type)?;
    let recommendation = RecommendationService::record_interaction(&db, id, kind).await?;

    Ok(Json(recommendation.into()))
}

/// Rate a recommendation 1-5 with optional feedback
#[utoipa::path(
    post,
    path = "/recommendations/{id}/rating",
    params(
        ("id" = Uuid, Path, description = "Recommendation ID")
    ),
    request_body = RatingRequest,
    responses(
        (status = 200, description = "Rating stored", body = RecommendationResponse),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "Recommendation not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Recommendations"
)]
pub async fn rate_recommendation(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
    Json(request): Json<RatingRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let recommendation =
        RecommendationService::rate(&db, id, request.rating, request.feedback).await?;

    Ok(Json(recommendation.into()))
}
