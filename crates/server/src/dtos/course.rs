use database::entities::course;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub credit_hours: i16,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        CourseResponse {
            id: model.id.to_string(),
            code: model.code,
            title: model.title,
            description: model.description,
            credit_hours: model.credit_hours,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseRequest {
    #[schema(example = "CS-101")]
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub credit_hours: i16,
}
