use crate::entities::{academic_record, course, course_enrollment, semester, student_profile};
use crate::error::{ServiceError, ServiceResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

pub const STATUS_ENROLLED: &str = "enrolled";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_WITHDRAWN: &str = "withdrawn";

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls a student into a course for a semester. One enrollment per
    /// (student, course, semester); a duplicate is rejected before the
    /// database unique index would.
    pub async fn enroll(
        db: &DatabaseConnection,
        student_profile_id: Uuid,
        course_id: Uuid,
        semester_id: Uuid,
    ) -> ServiceResult<course_enrollment::Model> {
        Self::check_references(db, student_profile_id, course_id, semester_id).await?;

        let duplicate = course_enrollment::Entity::find()
            .filter(
                Condition::all()
                    .add(course_enrollment::Column::StudentProfileId.eq(student_profile_id))
                    .add(course_enrollment::Column::CourseId.eq(course_id))
                    .add(course_enrollment::Column::SemesterId.eq(semester_id)),
            )
            .one(db)
            .await?;

        if duplicate.is_some() {
            return Err(ServiceError::conflict(
                "Student is already enrolled in this course for this semester",
            ));
        }

        let now = Utc::now();
        let new_enrollment = course_enrollment::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_profile_id: Set(student_profile_id),
            course_id: Set(course_id),
            semester_id: Set(semester_id),
            status: Set(STATUS_ENROLLED.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_enrollment.insert(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<course_enrollment::Model> {
        course_enrollment::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Enrollment not found"))
    }

    pub async fn list_by_student(
        db: &DatabaseConnection,
        student_profile_id: Uuid,
        semester_id: Option<Uuid>,
    ) -> ServiceResult<Vec<course_enrollment::Model>> {
        let mut condition = Condition::all()
            .add(course_enrollment::Column::StudentProfileId.eq(student_profile_id));

        if let Some(semester_id) = semester_id {
            condition = condition.add(course_enrollment::Column::SemesterId.eq(semester_id));
        }

        let enrollments = course_enrollment::Entity::find()
            .filter(condition)
            .order_by_desc(course_enrollment::Column::CreatedAt)
            .all(db)
            .await?;

        Ok(enrollments)
    }

    pub async fn withdraw(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> ServiceResult<course_enrollment::Model> {
        let enrollment = Self::get(db, id).await?;

        if enrollment.status != STATUS_ENROLLED {
            return Err(ServiceError::conflict(
                "Only an active enrollment can be withdrawn",
            ));
        }

        let mut active: course_enrollment::ActiveModel = enrollment.into();
        active.status = Set(STATUS_WITHDRAWN.to_string());
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    /// Marks an enrollment completed and writes the matching academic
    /// record in the same transaction.
    pub async fn complete(
        db: &DatabaseConnection,
        id: Uuid,
        grade: String,
        grade_points: f32,
    ) -> ServiceResult<course_enrollment::Model> {
        if !(0.0..=4.0).contains(&grade_points) {
            return Err(ServiceError::validation(
                "Grade points must be between 0.0 and 4.0",
            ));
        }

        let enrollment = Self::get(db, id).await?;

        if enrollment.status != STATUS_ENROLLED {
            return Err(ServiceError::conflict(
                "Only an active enrollment can be completed",
            ));
        }

        let txn = db.begin().await?;
        let now = Utc::now();

        let record = academic_record::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_enrollment_id: Set(enrollment.id),
            student_profile_id: Set(enrollment.student_profile_id),
            grade: Set(grade),
            grade_points: Set(grade_points),
            completed_at: Set(now),
            created_at: Set(now),
        };
        record.insert(&txn).await?;

        let mut active: course_enrollment::ActiveModel = enrollment.into();
        active.status = Set(STATUS_COMPLETED.to_string());
        active.updated_at = Set(now);
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    pub async fn records_by_student(
        db: &DatabaseConnection,
        student_profile_id: Uuid,
    ) -> ServiceResult<Vec<academic_record::Model>> {
        let records = academic_record::Entity::find()
            .filter(academic_record::Column::StudentProfileId.eq(student_profile_id))
            .order_by_desc(academic_record::Column::CompletedAt)
            .all(db)
            .await?;

        Ok(records)
    }

    async fn check_references(
        db: &DatabaseConnection,
        student_profile_id: Uuid,
        course_id: Uuid,
        semester_id: Uuid,
    ) -> ServiceResult<()> {
        if student_profile::Entity::find_by_id(student_profile_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::validation(
                "Referenced student profile does not exist",
            ));
        }

        if course::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(ServiceError::validation("Referenced course does not exist"));
        }

        if semester::Entity::find_by_id(semester_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(ServiceError::validation(
                "Referenced semester does not exist",
            ));
        }

        Ok(())
    }
}
