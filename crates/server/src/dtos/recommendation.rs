use database::entities::learning_recommendation;
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendationResponse {
    pub id: String,
    pub student_profile_id: String,
    pub learning_resource_id: String,
    pub course_id: Option<String>,
    pub relevance_score: f32,
    pub is_viewed: bool,
    pub is_saved: bool,
    pub is_completed: bool,
    pub rating: Option<i16>,
    pub feedback: Option<String>,
}

impl From<learning_recommendation::Model> for RecommendationResponse {
    fn from(model: learning_recommendation::Model) -> Self {
        RecommendationResponse {
            id: model.id.to_string(),
            student_profile_id: model.student_profile_id.to_string(),
            learning_resource_id: model.learning_resource_id.to_string(),
            course_id: model.course_id.map(|id| id.to_string()),
            relevance_score: model.relevance_score,
            is_viewed: model.is_viewed,
            is_saved: model.is_saved,
            is_completed: model.is_completed,
            rating: model.rating,
            feedback: model.feedback,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecommendationRequest {
    pub student_profile_id: Uuid,
    pub learning_resource_id: Uuid,
    pub course_id: Option<Uuid>,
    #[schema(minimum = 0.0, maximum = 1.0)]
    pub relevance_score: f32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InteractionRequest {
    #[schema(example = "viewed")]
    pub interaction_type: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RatingRequest {
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i16,
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RecommendationQueryParams {
    pub student_profile_id: Uuid,
}
