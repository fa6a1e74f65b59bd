use chrono::NaiveTime;
use database::entities::period;
use models::day_of_week::DayOfWeek;
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct PeriodResponse {
    pub id: String,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[schema(example = "monday")]
    pub day_of_week: String,
    pub semester_id: String,
}

impl From<period::Model> for PeriodResponse {
    fn from(model: period::Model) -> Self {
        PeriodResponse {
            id: model.id.to_string(),
            name: model.name,
            start_time: model.start_time,
            end_time: model.end_time,
            day_of_week: model.day_of_week,
            semester_id: model.semester_id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PeriodRequest {
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[schema(value_type = String, example = "monday")]
    pub day_of_week: DayOfWeek,
    pub semester_id: Uuid,
}
