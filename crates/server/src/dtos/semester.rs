use chrono::NaiveDate;
use database::entities::semester;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SemesterResponse {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub academic_year: String,
}

impl From<semester::Model> for SemesterResponse {
    fn from(model: semester::Model) -> Self {
        SemesterResponse {
            id: model.id.to_string(),
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            is_active: model.is_active,
            academic_year: model.academic_year,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SemesterRequest {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_active: bool,
    #[schema(example = "2026/2027")]
    pub academic_year: String,
}
