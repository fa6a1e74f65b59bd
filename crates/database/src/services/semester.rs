use crate::entities::semester;
use crate::error::{ServiceError, ServiceResult};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

/// Fields accepted when creating or updating a semester
#[derive(Debug, Clone)]
pub struct SemesterInput {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub academic_year: String,
}

pub struct SemesterService;

impl SemesterService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<semester::Model>> {
        let semesters = semester::Entity::find()
            .order_by_desc(semester::Column::StartDate)
            .all(db)
            .await?;

        Ok(semesters)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<semester::Model> {
        semester::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Semester not found"))
    }

    /// Returns the single currently active semester
    pub async fn get_active(db: &DatabaseConnection) -> ServiceResult<semester::Model> {
        semester::Entity::find()
            .filter(semester::Column::IsActive.eq(true))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("No active semester found"))
    }

    /// Creates a semester. Activation and the deactivation of every other
    /// semester happen in one transaction, so the at-most-one-active
    /// invariant holds at every commit point.
    pub async fn create(
        db: &DatabaseConnection,
        input: SemesterInput,
    ) -> ServiceResult<semester::Model> {
        Self::validate_dates(&input)?;

        let txn = db.begin().await?;

        if input.is_active {
            Self::deactivate_all(&txn, None).await?;
        }

        let now = Utc::now();
        let new_semester = semester::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            is_active: Set(input.is_active),
            academic_year: Set(input.academic_year),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = new_semester.insert(&txn).await?;
        txn.commit().await?;

        Ok(created)
    }

    /// Updates a semester, applying the same transactional activation rule
    /// as `create`
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: SemesterInput,
    ) -> ServiceResult<semester::Model> {
        Self::validate_dates(&input)?;

        let txn = db.begin().await?;

        let existing = semester::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Semester not found"))?;

        if input.is_active {
            Self::deactivate_all(&txn, Some(id)).await?;
        }

        let mut active: semester::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.start_date = Set(input.start_date);
        active.end_date = Set(input.end_date);
        active.is_active = Set(input.is_active);
        active.academic_year = Set(input.academic_year);
        active.updated_at = Set(Utc::now());

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a semester. The active semester cannot be deleted; another
    /// one has to be activated first.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let existing = Self::get(db, id).await?;

        if existing.is_active {
            return Err(ServiceError::conflict(
                "Cannot delete the active semester; activate another semester first",
            ));
        }

        semester::Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Clears the active flag on every semester, optionally sparing one row
    async fn deactivate_all<C: ConnectionTrait>(conn: &C, except: Option<Uuid>) -> ServiceResult<()> {
        let mut query = semester::Entity::update_many()
            .col_expr(semester::Column::IsActive, Expr::value(false))
            .col_expr(semester::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(semester::Column::IsActive.eq(true));

        if let Some(id) = except {
            query = query.filter(semester::Column::Id.ne(id));
        }

        query.exec(conn).await?;
        Ok(())
    }

    fn validate_dates(input: &SemesterInput) -> ServiceResult<()> {
        if input.end_date < input.start_date {
            return Err(ServiceError::validation(
                "Semester end date cannot precede its start date",
            ));
        }
        Ok(())
    }
}
