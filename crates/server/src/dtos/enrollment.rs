use database::entities::course_enrollment;
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: String,
    pub student_profile_id: String,
    pub course_id: String,
    pub semester_id: String,
    #[schema(example = "enrolled")]
    pub status: String,
}

impl From<course_enrollment::Model> for EnrollmentResponse {
    fn from(model: course_enrollment::Model) -> Self {
        EnrollmentResponse {
            id: model.id.to_string(),
            student_profile_id: model.student_profile_id.to_string(),
            course_id: model.course_id.to_string(),
            semester_id: model.semester_id.to_string(),
            status: model.status,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollmentRequest {
    pub student_profile_id: Uuid,
    pub course_id: Uuid,
    pub semester_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CompleteEnrollmentRequest {
    #[schema(example = "A-")]
    pub grade: String,
    pub grade_points: f32,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct EnrollmentQueryParams {
    pub student_profile_id: Uuid,
    pub semester_id: Option<Uuid>,
}
