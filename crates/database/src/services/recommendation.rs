use crate::entities::{
    learning_recommendation, learning_resource, resource_interaction, student_profile,
};
use crate::error::{ServiceError, ServiceResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::str::FromStr;
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

/// Student interaction kinds tracked against a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum InteractionKind {
    Viewed,
    Saved,
    Completed,
    Rated,
}

/// Fields accepted when registering a generated recommendation
#[derive(Debug, Clone)]
pub struct RecommendationInput {
    pub student_profile_id: Uuid,
    pub learning_resource_id: Uuid,
    pub course_id: Option<Uuid>,
    pub relevance_score: f32,
}

pub struct RecommendationService;

impl RecommendationService {
    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> ServiceResult<learning_recommendation::Model> {
        learning_recommendation::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Recommendation not found"))
    }

    /// Recommendations for one student, most relevant first
    pub async fn list_by_student(
        db: &DatabaseConnection,
        student_profile_id: Uuid,
    ) -> ServiceResult<Vec<learning_recommendation::Model>> {
        let recommendations = learning_recommendation::Entity::find()
            .filter(learning_recommendation::Column::StudentProfileId.eq(student_profile_id))
            .order_by_desc(learning_recommendation::Column::RelevanceScore)
            .all(db)
            .await?;

        Ok(recommendations)
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: RecommendationInput,
    ) -> ServiceResult<learning_recommendation::Model> {
        if !(0.0..=1.0).contains(&input.relevance_score) {
            return Err(ServiceError::validation(
                "Relevance score must be between 0.0 and 1.0",
            ));
        }

        if student_profile::Entity::find_by_id(input.student_profile_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::validation(
                "Referenced student profile does not exist",
            ));
        }

        if learning_resource::Entity::find_by_id(input.learning_resource_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::validation(
                "Referenced learning resource does not exist",
            ));
        }

        let now = Utc::now();
        let new_recommendation = learning_recommendation::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_profile_id: Set(input.student_profile_id),
            learning_resource_id: Set(input.learning_resource_id),
            course_id: Set(input.course_id),
            relevance_score: Set(input.relevance_score),
            is_viewed: Set(false),
            is_saved: Set(false),
            is_completed: Set(false),
            rating: Set(None),
            feedback: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_recommendation.insert(db).await?)
    }

    /// Records a view/save/complete interaction and flips the matching flag
    /// on the recommendation, both in one transaction
    pub async fn record_interaction(
        db: &DatabaseConnection,
        id: Uuid,
        kind: InteractionKind,
    ) -> ServiceResult<learning_recommendation::Model> {
        if kind == InteractionKind::Rated {
            return Err(ServiceError::validation(
                "Ratings are submitted through the rating endpoint",
            ));
        }

        let recommendation = Self::get(db, id).await?;

        let txn = db.begin().await?;
        let now = Utc::now();

        Self::insert_interaction(&txn, &recommendation, kind, now).await?;

        let mut active: learning_recommendation::ActiveModel = recommendation.into();
        match kind {
            InteractionKind::Viewed => active.is_viewed = Set(true),
            InteractionKind::Saved => active.is_saved = Set(true),
            InteractionKind::Completed => active.is_completed = Set(true),
            InteractionKind::Rated => unreachable!(),
        }
        active.updated_at = Set(now);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Stores a 1-5 rating with optional free-text feedback
    pub async fn rate(
        db: &DatabaseConnection,
        id: Uuid,
        rating: i16,
        feedback: Option<String>,
    ) -> ServiceResult<learning_recommendation::Model> {
        if !(1..=5).contains(&rating) {
            return Err(ServiceError::validation("Rating must be between 1 and 5"));
        }

        let recommendation = Self::get(db, id).await?;

        let txn = db.begin().await?;
        let now = Utc::now();

        Self::insert_interaction(&txn, &recommendation, InteractionKind::Rated, now).await?;

        let mut active: learning_recommendation::ActiveModel = recommendation.into();
        active.rating = Set(Some(rating));
        active.feedback = Set(feedback);
        active.updated_at = Set(now);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    pub fn parse_interaction(kind: &str) -> ServiceResult<InteractionKind> {
        InteractionKind::from_str(kind)
            .map_err(|_| ServiceError::validation(format!("Unknown interaction type '{kind}'")))
    }

    async fn insert_interaction<C: sea_orm::ConnectionTrait>(
        conn: &C,
        recommendation: &learning_recommendation::Model,
        kind: InteractionKind,
        now: chrono::DateTime<Utc>,
    ) -> ServiceResult<()> {
        let interaction = resource_interaction::ActiveModel {
            id: Set(Uuid::new_v4()),
            learning_recommendation_id: Set(recommendation.id),
            student_profile_id: Set(recommendation.student_profile_id),
            interaction_type: Set(kind.as_ref().to_string()),
            occurred_at: Set(now),
        };
        interaction.insert(conn).await?;

        Ok(())
    }
}
