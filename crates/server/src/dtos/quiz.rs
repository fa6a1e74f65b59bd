use chrono::{DateTime, Utc};
use database::entities::quiz;
use models::quiz_data::{AttemptAnalysis, MarkedAnswer, Question, QuestionOption, SubmittedAnswer};
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub time_limit_minutes: i32,
    pub pass_threshold: i16,
    pub question_count: usize,
}

impl From<quiz::Model> for QuizResponse {
    fn from(model: quiz::Model) -> Self {
        let question_count = model
            .questions
            .as_array()
            .map(|questions| questions.len())
            .unwrap_or_default();

        QuizResponse {
            id: model.id.to_string(),
            course_id: model.course_id.to_string(),
            title: model.title,
            time_limit_minutes: model.time_limit_minutes,
            pass_threshold: model.pass_threshold,
            question_count,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    pub course_id: Uuid,
    pub title: String,
    pub time_limit_minutes: i32,
    pub pass_threshold: i16,
    pub questions: Vec<QuestionRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionRequest {
    pub prompt: String,
    pub topic: String,
    pub options: Vec<OptionRequest>,
    #[schema(example = "b")]
    pub correct_answer: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OptionRequest {
    pub key: String,
    pub text: String,
}

impl From<QuestionRequest> for Question {
    fn from(request: QuestionRequest) -> Self {
        Question {
            id: Uuid::new_v4(),
            prompt: request.prompt,
            topic: request.topic,
            options: request
                .options
                .into_iter()
                .map(|option| QuestionOption {
                    key: option.key,
                    text: option.text,
                })
                .collect(),
            correct_answer: request.correct_answer,
        }
    }
}

/// A question as shown to the student; the correct answer never leaves
/// the server
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionResponse {
    pub id: String,
    pub prompt: String,
    pub topic: String,
    pub options: Vec<OptionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OptionResponse {
    pub key: String,
    pub text: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        QuestionResponse {
            id: question.id.to_string(),
            prompt: question.prompt,
            topic: question.topic,
            options: question
                .options
                .into_iter()
                .map(|option| OptionResponse {
                    key: option.key,
                    text: option.text,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StartAttemptRequest {
    pub quiz_id: Uuid,
    pub student_profile_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitAttemptRequest {
    pub answers: Vec<AnswerRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnswerRequest {
    pub question_id: Uuid,
    #[schema(example = "b")]
    pub selected_option: String,
}

impl From<AnswerRequest> for SubmittedAnswer {
    fn from(request: AnswerRequest) -> Self {
        SubmittedAnswer {
            question_id: request.question_id,
            selected_option: request.selected_option,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkedAnswerResponse {
    pub question_id: String,
    pub selected_option: Option<String>,
    pub correct: bool,
}

impl From<MarkedAnswer> for MarkedAnswerResponse {
    fn from(marked: MarkedAnswer) -> Self {
        MarkedAnswerResponse {
            question_id: marked.question_id.to_string(),
            selected_option: marked.selected_option,
            correct: marked.correct,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

impl From<AttemptAnalysis> for AnalysisResponse {
    fn from(analysis: AttemptAnalysis) -> Self {
        AnalysisResponse {
            strengths: analysis.strengths,
            weaknesses: analysis.weaknesses,
            recommendations: analysis.recommendations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttemptResponse {
    pub id: String,
    pub quiz_id: String,
    pub student_profile_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    #[schema(example = "in_progress")]
    pub status: String,
    pub score: Option<i16>,
    pub is_passed: Option<bool>,
    pub questions: Vec<QuestionResponse>,
    pub answers: Option<Vec<MarkedAnswerResponse>>,
    pub analysis: Option<AnalysisResponse>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct AttemptQueryParams {
    pub student_profile_id: Uuid,
}
