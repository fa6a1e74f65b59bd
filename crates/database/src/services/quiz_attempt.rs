use crate::entities::{quiz_attempt, student_profile};
use crate::error::{ServiceError, ServiceResult};
use crate::services::quiz::QuizService;
use chrono::{DateTime, Duration, Utc};
use models::attempt::AttemptStatus;
use models::quiz_data::{self, Question, SubmittedAnswer};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::str::FromStr;
use uuid::Uuid;

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Starts an attempt: snapshots the quiz's current question set onto a
    /// new row so later quiz edits cannot change how the attempt is graded.
    pub async fn start(
        db: &DatabaseConnection,
        quiz_id: Uuid,
        student_profile_id: Uuid,
    ) -> ServiceResult<quiz_attempt::Model> {
        let quiz = QuizService::get(db, quiz_id).await?;

        let student_exists = student_profile::Entity::find_by_id(student_profile_id)
            .one(db)
            .await?
            .is_some();

        if !student_exists {
            return Err(ServiceError::validation(
                "Referenced student profile does not exist",
            ));
        }

        let now = Utc::now();
        let new_attempt = quiz_attempt::ActiveModel {
            id: Set(Uuid::new_v4()),
            quiz_id: Set(quiz.id),
            student_profile_id: Set(student_profile_id),
            started_at: Set(now),
            ended_at: Set(None),
            questions: Set(quiz.questions.clone()),
            answers: Set(None),
            score: Set(None),
            is_passed: Set(None),
            status: Set(AttemptStatus::InProgress.as_str().to_string()),
            analysis: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_attempt.insert(db).await?)
    }

    /// Grades a submission against the attempt's snapshot.
    ///
    /// The deadline is enforced here: a submission arriving after
    /// `started_at + time_limit` transitions the attempt to `timed_out`
    /// without grading, and a closed attempt is never re-graded.
    pub async fn submit(
        db: &DatabaseConnection,
        attempt_id: Uuid,
        answers: Vec<SubmittedAnswer>,
        now: DateTime<Utc>,
    ) -> ServiceResult<quiz_attempt::Model> {
        let attempt = Self::get(db, attempt_id).await?;

        let status = AttemptStatus::from_str(&attempt.status)
            .map_err(|_| ServiceError::validation("Attempt has an unknown status"))?;

        if !status.is_open() {
            return Err(ServiceError::conflict(
                "Quiz attempt has already been submitted",
            ));
        }

        let quiz = QuizService::get(db, attempt.quiz_id).await?;
        let deadline = attempt.started_at + Duration::minutes(i64::from(quiz.time_limit_minutes));

        if now > deadline {
            Self::close(db, attempt, AttemptStatus::TimedOut, now).await?;
            return Err(ServiceError::conflict(
                "Quiz attempt time limit exceeded",
            ));
        }

        let questions: Vec<Question> = serde_json::from_value(attempt.questions.clone())?;
        let summary = quiz_data::score_attempt(&questions, &answers);
        let analysis = quiz_data::analyze_attempt(&questions, &summary);

        let mut active: quiz_attempt::ActiveModel = attempt.into();
        active.answers = Set(Some(serde_json::to_value(&summary.marked)?));
        active.score = Set(Some(summary.score));
        active.is_passed = Set(Some(summary.score >= quiz.pass_threshold));
        active.analysis = Set(Some(serde_json::to_value(&analysis)?));
        active.status = Set(AttemptStatus::Completed.as_str().to_string());
        active.ended_at = Set(Some(now));
        active.updated_at = Set(now);

        Ok(active.update(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<quiz_attempt::Model> {
        quiz_attempt::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Quiz attempt not found"))
    }

    pub async fn list_by_student(
        db: &DatabaseConnection,
        student_profile_id: Uuid,
    ) -> ServiceResult<Vec<quiz_attempt::Model>> {
        let attempts = quiz_attempt::Entity::find()
            .filter(quiz_attempt::Column::StudentProfileId.eq(student_profile_id))
            .order_by_desc(quiz_attempt::Column::StartedAt)
            .all(db)
            .await?;

        Ok(attempts)
    }

    async fn close(
        db: &DatabaseConnection,
        attempt: quiz_attempt::Model,
        status: AttemptStatus,
        now: DateTime<Utc>,
    ) -> ServiceResult<()> {
        let mut active: quiz_attempt::ActiveModel = attempt.into();
        active.status = Set(status.as_str().to_string());
        active.ended_at = Set(Some(now));
        active.updated_at = Set(now);
        active.update(db).await?;

        Ok(())
    }
}
