use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "learning_recommendations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub student_profile_id: Uuid,
    pub learning_resource_id: Uuid,
    pub course_id: Option<Uuid>,
    pub relevance_score: f32,
    pub is_viewed: bool,
    pub is_saved: bool,
    pub is_completed: bool,
    pub rating: Option<i16>, // 1..=5 once rated
    pub feedback: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_profile::Entity",
        from = "Column::StudentProfileId",
        to = "super::student_profile::Column::Id"
    )]
    StudentProfile,
    #[sea_orm(
        belongs_to = "super::learning_resource::Entity",
        from = "Column::LearningResourceId",
        to = "super::learning_resource::Column::Id"
    )]
    Resource,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::resource_interaction::Entity")]
    Interactions,
}

impl Related<super::student_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl Related<super::learning_resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::resource_interaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
