use chrono::{DateTime, Utc};
use database::entities::{academic_record, student_profile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentProfileResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub enrollment_year: i16,
}

impl From<student_profile::Model> for StudentProfileResponse {
    fn from(model: student_profile::Model) -> Self {
        StudentProfileResponse {
            id: model.id.to_string(),
            full_name: model.full_name,
            email: model.email,
            enrollment_year: model.enrollment_year,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentProfileRequest {
    pub full_name: String,
    pub email: String,
    pub enrollment_year: i16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AcademicRecordResponse {
    pub id: String,
    pub course_enrollment_id: String,
    pub grade: String,
    pub grade_points: f32,
    pub completed_at: DateTime<Utc>,
}

impl From<academic_record::Model> for AcademicRecordResponse {
    fn from(model: academic_record::Model) -> Self {
        AcademicRecordResponse {
            id: model.id.to_string(),
            course_enrollment_id: model.course_enrollment_id.to_string(),
            grade: model.grade,
            grade_points: model.grade_points,
            completed_at: model.completed_at,
        }
    }
}
