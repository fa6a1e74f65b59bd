use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "academic_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub course_enrollment_id: Uuid,
    pub student_profile_id: Uuid,
    pub grade: String, // e.g. "A-"
    pub grade_points: f32,
    pub completed_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_enrollment::Entity",
        from = "Column::CourseEnrollmentId",
        to = "super::course_enrollment::Column::Id"
    )]
    Enrollment,
    #[sea_orm(
        belongs_to = "super::student_profile::Entity",
        from = "Column::StudentProfileId",
        to = "super::student_profile::Column::Id"
    )]
    StudentProfile,
}

impl Related<super::course_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::student_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
