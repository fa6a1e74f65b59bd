use crate::entities::{period, semester};
use crate::error::{ServiceError, ServiceResult};
use chrono::{NaiveTime, Utc};
use models::day_of_week::DayOfWeek;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

/// Fields accepted when creating or updating a period
#[derive(Debug, Clone)]
pub struct PeriodInput {
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub day_of_week: DayOfWeek,
    pub semester_id: Uuid,
}

pub struct PeriodService;

impl PeriodService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<period::Model>> {
        let periods = period::Entity::find()
            .order_by_asc(period::Column::SemesterId)
            .order_by_asc(period::Column::StartTime)
            .all(db)
            .await?;

        Ok(periods)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<period::Model> {
        period::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Period not found"))
    }

    /// Returns the periods of one semester, weekday order then start time
    pub async fn find_by_semester(
        db: &DatabaseConnection,
        semester_id: Uuid,
    ) -> ServiceResult<Vec<period::Model>> {
        let mut periods = period::Entity::find()
            .filter(period::Column::SemesterId.eq(semester_id))
            .order_by_asc(period::Column::StartTime)
            .all(db)
            .await?;

        periods.sort_by_key(|p| {
            p.day_of_week
                .parse::<DayOfWeek>()
                .map(|d| d.ordinal())
                .unwrap_or(u8::MAX)
        });

        Ok(periods)
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: PeriodInput,
    ) -> ServiceResult<period::Model> {
        Self::validate(db, &input).await?;

        let now = Utc::now();
        let new_period = period::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            start_time: Set(input.start_time),
            end_time: Set(input.end_time),
            day_of_week: Set(input.day_of_week.as_str().to_string()),
            semester_id: Set(input.semester_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_period.insert(db).await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: PeriodInput,
    ) -> ServiceResult<period::Model> {
        let existing = Self::get(db, id).await?;
        Self::validate(db, &input).await?;

        let mut active: period::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.start_time = Set(input.start_time);
        active.end_time = Set(input.end_time);
        active.day_of_week = Set(input.day_of_week.as_str().to_string());
        active.semester_id = Set(input.semester_id);
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        Self::get(db, id).await?;
        period::Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    async fn validate(db: &DatabaseConnection, input: &PeriodInput) -> ServiceResult<()> {
        if input.end_time <= input.start_time {
            return Err(ServiceError::validation(
                "Period end time must be after its start time",
            ));
        }

        let semester_exists = semester::Entity::find_by_id(input.semester_id)
            .one(db)
            .await?
            .is_some();

        if !semester_exists {
            return Err(ServiceError::validation(
                "Referenced semester does not exist",
            ));
        }

        Ok(())
    }
}
