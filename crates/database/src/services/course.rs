use crate::entities::course;
use crate::error::{ServiceError, ServiceResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

/// Fields accepted when creating a course
#[derive(Debug, Clone)]
pub struct CourseInput {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub credit_hours: i16,
}

pub struct CourseService;

impl CourseService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<course::Model>> {
        let courses = course::Entity::find()
            .order_by_asc(course::Column::Code)
            .all(db)
            .await?;

        Ok(courses)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<course::Model> {
        course::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course not found"))
    }

    pub async fn create(db: &DatabaseConnection, input: CourseInput) -> ServiceResult<course::Model> {
        if input.credit_hours <= 0 {
            return Err(ServiceError::validation("Credit hours must be positive"));
        }

        let duplicate = course::Entity::find()
            .filter(course::Column::Code.eq(input.code.clone()))
            .one(db)
            .await?;

        if duplicate.is_some() {
            return Err(ServiceError::conflict(
                "A course with this code already exists",
            ));
        }

        let now = Utc::now();
        let new_course = course::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(input.code),
            title: Set(input.title),
            description: Set(input.description),
            credit_hours: Set(input.credit_hours),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_course.insert(db).await?)
    }
}
