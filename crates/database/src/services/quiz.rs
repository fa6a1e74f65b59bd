use crate::entities::{course, quiz};
use crate::error::{ServiceError, ServiceResult};
use chrono::Utc;
use models::quiz_data::Question;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

/// Fields accepted when creating a quiz
#[derive(Debug, Clone)]
pub struct QuizInput {
    pub course_id: Uuid,
    pub title: String,
    pub time_limit_minutes: i32,
    pub pass_threshold: i16,
    pub questions: Vec<Question>,
}

pub struct QuizService;

impl QuizService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<quiz::Model>> {
        let quizzes = quiz::Entity::find()
            .order_by_asc(quiz::Column::Title)
            .all(db)
            .await?;

        Ok(quizzes)
    }

    pub async fn list_by_course(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> ServiceResult<Vec<quiz::Model>> {
        let quizzes = quiz::Entity::find()
            .filter(quiz::Column::CourseId.eq(course_id))
            .order_by_asc(quiz::Column::Title)
            .all(db)
            .await?;

        Ok(quizzes)
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> ServiceResult<quiz::Model> {
        quiz::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Quiz not found"))
    }

    pub async fn create(db: &DatabaseConnection, input: QuizInput) -> ServiceResult<quiz::Model> {
        Self::validate(&input)?;

        let course_exists = course::Entity::find_by_id(input.course_id)
            .one(db)
            .await?
            .is_some();

        if !course_exists {
            return Err(ServiceError::validation("Referenced course does not exist"));
        }

        let now = Utc::now();
        let new_quiz = quiz::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(input.course_id),
            title: Set(input.title),
            time_limit_minutes: Set(input.time_limit_minutes),
            pass_threshold: Set(input.pass_threshold),
            questions: Set(serde_json::to_value(&input.questions)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_quiz.insert(db).await?)
    }

    fn validate(input: &QuizInput) -> ServiceResult<()> {
        if input.questions.is_empty() {
            return Err(ServiceError::validation(
                "A quiz needs at least one question",
            ));
        }

        if input.time_limit_minutes <= 0 {
            return Err(ServiceError::validation(
                "Quiz time limit must be positive",
            ));
        }

        if !(0..=100).contains(&input.pass_threshold) {
            return Err(ServiceError::validation(
                "Pass threshold must be a percentage between 0 and 100",
            ));
        }

        for question in &input.questions {
            let has_correct_option = question
                .options
                .iter()
                .any(|o| o.key == question.correct_answer);

            if !has_correct_option {
                return Err(ServiceError::validation(format!(
                    "Question '{}' has no option matching its correct answer",
                    question.prompt
                )));
            }
        }

        Ok(())
    }
}
