use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use database::entities::{period, quiz, quiz_attempt, semester};
use database::error::ServiceError;
use database::services::period::PeriodService;
use database::services::quiz::{QuizInput, QuizService};
use database::services::quiz_attempt::QuizAttemptService;
use database::services::semester::{SemesterInput, SemesterService};
use models::attempt::AttemptStatus;
use models::quiz_data::{Question, QuestionOption, SubmittedAnswer};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use uuid::Uuid;

fn semester_model(id: Uuid, is_active: bool) -> semester::Model {
    let now = Utc::now();
    semester::Model {
        id,
        name: "Fall Semester".to_owned(),
        start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 12, 18).unwrap(),
        is_active,
        academic_year: "2026/2027".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

fn period_model(semester_id: Uuid, day: &str, start: NaiveTime) -> period::Model {
    let now = Utc::now();
    period::Model {
        id: Uuid::new_v4(),
        name: format!("Period {day}"),
        start_time: start,
        end_time: start + Duration::minutes(45),
        day_of_week: day.to_owned(),
        semester_id,
        created_at: now,
        updated_at: now,
    }
}

fn single_question() -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: "2 + 2 = ?".to_owned(),
        topic: "arithmetic".to_owned(),
        options: vec![
            QuestionOption {
                key: "a".to_owned(),
                text: "3".to_owned(),
            },
            QuestionOption {
                key: "b".to_owned(),
                text: "4".to_owned(),
            },
        ],
        correct_answer: "b".to_owned(),
    }
}

fn quiz_model(id: Uuid, time_limit_minutes: i32) -> quiz::Model {
    let now = Utc::now();
    quiz::Model {
        id,
        course_id: Uuid::new_v4(),
        title: "Arithmetic basics".to_owned(),
        time_limit_minutes,
        pass_threshold: 60,
        questions: serde_json::to_value(vec![single_question()]).unwrap(),
        created_at: now,
        updated_at: now,
    }
}

fn attempt_model(quiz_id: Uuid, status: AttemptStatus, question: &Question) -> quiz_attempt::Model {
    let now = Utc::now();
    quiz_attempt::Model {
        id: Uuid::new_v4(),
        quiz_id,
        student_profile_id: Uuid::new_v4(),
        started_at: now,
        ended_at: None,
        questions: serde_json::to_value(vec![question.clone()]).unwrap(),
        answers: None,
        score: None,
        is_passed: None,
        status: status.as_str().to_owned(),
        analysis: None,
        created_at: now,
        updated_at: now,
    }
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<semester::Model>::new()])
        .into_connection()
}

#[tokio::test]
async fn get_active_semester_without_one_is_not_found() {
    let err = SemesterService::get_active(&empty_db()).await.unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(m) if m == "No active semester found"));
}

#[tokio::test]
async fn get_missing_semester_is_not_found() {
    let err = SemesterService::get(&empty_db(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(m) if m == "Semester not found"));
}

#[tokio::test]
async fn create_semester_rejects_inverted_dates() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let input = SemesterInput {
        name: "Broken".to_owned(),
        start_date: NaiveDate::from_ymd_opt(2026, 12, 18).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        is_active: false,
        academic_year: "2026/2027".to_owned(),
    };
    let err = SemesterService::create(&db, input).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn create_active_semester_deactivates_the_others_first() {
    let id = Uuid::new_v4();
    let created = semester_model(id, true);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([[created.clone()]])
        .into_connection();

    let input = SemesterInput {
        name: created.name.clone(),
        start_date: created.start_date,
        end_date: created.end_date,
        is_active: true,
        academic_year: created.academic_year.clone(),
    };
    let result = SemesterService::create(&db, input).await.unwrap();

    assert_eq!(result, created);

    // first statement inside the transaction is the bulk deactivation
    let log = db.into_transaction_log();
    let statement = format!("{:?}", log.first().unwrap());
    assert!(statement.contains("UPDATE \"semesters\""));
    assert!(statement.contains("\"is_active\""));
}

#[tokio::test]
async fn deleting_the_active_semester_is_a_conflict() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[semester_model(id, true)]])
        .into_connection();

    let err = SemesterService::delete(&db, id).await.unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn periods_of_a_semester_come_back_in_weekday_order() {
    let semester_id = Uuid::new_v4();
    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let wednesday = period_model(semester_id, "wednesday", nine);
    let monday = period_model(semester_id, "monday", nine);
    let friday = period_model(semester_id, "friday", nine);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[wednesday.clone(), monday.clone(), friday.clone()]])
        .into_connection();

    let periods = PeriodService::find_by_semester(&db, semester_id)
        .await
        .unwrap();

    let days: Vec<&str> = periods.iter().map(|p| p.day_of_week.as_str()).collect();
    assert_eq!(days, ["monday", "wednesday", "friday"]);
}

#[tokio::test]
async fn create_quiz_rejects_an_empty_question_set() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let input = QuizInput {
        course_id: Uuid::new_v4(),
        title: "Empty".to_owned(),
        time_limit_minutes: 30,
        pass_threshold: 60,
        questions: vec![],
    };
    let err = QuizService::create(&db, input).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(m) if m.contains("at least one question")));
}

#[tokio::test]
async fn create_quiz_rejects_a_dangling_correct_answer() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let mut question = single_question();
    question.correct_answer = "z".to_owned();
    let input = QuizInput {
        course_id: Uuid::new_v4(),
        title: "Broken key".to_owned(),
        time_limit_minutes: 30,
        pass_threshold: 60,
        questions: vec![question],
    };
    let err = QuizService::create(&db, input).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn submitting_a_closed_attempt_is_a_conflict() {
    let question = single_question();
    let attempt = attempt_model(Uuid::new_v4(), AttemptStatus::Completed, &question);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[attempt.clone()]])
        .into_connection();

    let err = QuizAttemptService::submit(&db, attempt.id, vec![], Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(m) if m.contains("already been submitted")));
}

#[tokio::test]
async fn late_submission_times_the_attempt_out() {
    let question = single_question();
    let quiz = quiz_model(Uuid::new_v4(), 30);
    let attempt = attempt_model(quiz.id, AttemptStatus::InProgress, &question);
    let mut timed_out = attempt.clone();
    timed_out.status = AttemptStatus::TimedOut.as_str().to_owned();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[attempt.clone()]])
        .append_query_results([[quiz]])
        .append_query_results([[timed_out]])
        .into_connection();

    let late = attempt.started_at + Duration::minutes(31);
    let err = QuizAttemptService::submit(&db, attempt.id, vec![], late)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(m) if m.contains("time limit exceeded")));
}

#[tokio::test]
async fn in_time_submission_is_graded_and_completed() {
    let question = single_question();
    let quiz = quiz_model(Uuid::new_v4(), 30);
    let attempt = attempt_model(quiz.id, AttemptStatus::InProgress, &question);
    let mut graded = attempt.clone();
    graded.status = AttemptStatus::Completed.as_str().to_owned();
    graded.score = Some(100);
    graded.is_passed = Some(true);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[attempt.clone()]])
        .append_query_results([[quiz]])
        .append_query_results([[graded.clone()]])
        .into_connection();

    let answers = vec![SubmittedAnswer {
        question_id: question.id,
        selected_option: "b".to_owned(),
    }];
    let on_time = attempt.started_at + Duration::minutes(5);
    let result = QuizAttemptService::submit(&db, attempt.id, answers, on_time)
        .await
        .unwrap();

    assert_eq!(result.status, AttemptStatus::Completed.as_str());
    assert_eq!(result.score, Some(100));
    assert_eq!(result.is_passed, Some(true));

    // the UPDATE that persisted the grade carries the computed score
    let log = db.into_transaction_log();
    let statement = format!("{:?}", log.last().unwrap());
    assert!(statement.contains("UPDATE \"quiz_attempts\""));
    assert!(statement.contains("100"));
}
