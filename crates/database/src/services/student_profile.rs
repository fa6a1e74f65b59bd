use crate::entities::student_profile;
use crate::error::{ServiceError, ServiceResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

/// Fields accepted when registering a student profile
#[derive(Debug, Clone)]
pub struct StudentProfileInput {
    pub full_name: String,
    pub email: String,
    pub enrollment_year: i16,
}

pub struct StudentProfileService;

impl StudentProfileService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<student_profile::Model>> {
        let profiles = student_profile::Entity::find()
            .order_by_asc(student_profile::Column::FullName)
            .all(db)
            .await?;

        Ok(profiles)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<student_profile::Model> {
        student_profile::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student profile not found"))
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: StudentProfileInput,
    ) -> ServiceResult<student_profile::Model> {
        if input.email.trim().is_empty() || !input.email.contains('@') {
            return Err(ServiceError::validation("A valid email address is required"));
        }

        let duplicate = student_profile::Entity::find()
            .filter(student_profile::Column::Email.eq(input.email.clone()))
            .one(db)
            .await?;

        if duplicate.is_some() {
            return Err(ServiceError::conflict(
                "A student profile with this email already exists",
            ));
        }

        let now = Utc::now();
        let new_profile = student_profile::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(input.full_name),
            email: Set(input.email),
            enrollment_year: Set(input.enrollment_year),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_profile.insert(db).await?)
    }
}
