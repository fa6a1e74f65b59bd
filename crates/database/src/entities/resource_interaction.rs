use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resource_interactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub learning_recommendation_id: Uuid,
    pub student_profile_id: Uuid,
    pub interaction_type: String, // viewed, saved, completed, rated
    pub occurred_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::learning_recommendation::Entity",
        from = "Column::LearningRecommendationId",
        to = "super::learning_recommendation::Column::Id"
    )]
    Recommendation,
    #[sea_orm(
        belongs_to = "super::student_profile::Entity",
        from = "Column::StudentProfileId",
        to = "super::student_profile::Column::Id"
    )]
    StudentProfile,
}

impl Related<super::learning_recommendation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recommendation.def()
    }
}

impl Related<super::student_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
