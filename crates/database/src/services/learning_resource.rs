use crate::entities::learning_resource;
use crate::error::{ServiceError, ServiceResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
};
use uuid::Uuid;

/// Fields accepted when registering a learning resource
#[derive(Debug, Clone)]
pub struct LearningResourceInput {
    pub title: String,
    pub url: String,
    pub resource_type: String,
    pub topic: String,
}

pub struct LearningResourceService;

impl LearningResourceService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<learning_resource::Model>> {
        let resources = learning_resource::Entity::find()
            .order_by_asc(learning_resource::Column::Title)
            .all(db)
            .await?;

        Ok(resources)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<learning_resource::Model> {
        learning_resource::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Learning resource not found"))
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: LearningResourceInput,
    ) -> ServiceResult<learning_resource::Model> {
        if input.url.trim().is_empty() {
            return Err(ServiceError::validation("A resource URL is required"));
        }

        let now = Utc::now();
        let new_resource = learning_resource::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            url: Set(input.url),
            resource_type: Set(input.resource_type),
            topic: Set(input.topic),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_resource.insert(db).await?)
    }
}
