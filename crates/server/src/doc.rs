use crate::routes::{
    course, enrollment, health, period, quiz, recommendation, resource, root, semester, student,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        semester::get_semesters,
        semester::get_active_semester,
        semester::get_semester_by_id,
        semester::create_semester,
        semester::update_semester,
        semester::delete_semester,
        period::get_periods,
        period::get_period_by_id,
        period::get_periods_by_semester,
        period::create_period,
        period::update_period,
        period::delete_period,
        course::get_courses,
        course::get_course_by_id,
        course::get_course_quizzes,
        course::create_course,
        quiz::get_quizzes,
        quiz::get_quiz_by_id,
        quiz::create_quiz,
        quiz::start_attempt,
        quiz::submit_attempt,
        quiz::get_attempt_by_id,
        quiz::get_attempts,
        student::get_students,
        student::get_student_by_id,
        student::create_student,
        student::get_student_records,
        enrollment::get_enrollments,
        enrollment::create_enrollment,
        enrollment::withdraw_enrollment,
        enrollment::complete_enrollment,
        resource::get_resources,
        resource::get_resource_by_id,
        resource::create_resource,
        recommendation::get_recommendations,
        recommendation::get_recommendation_by_id,
        recommendation::create_recommendation,
        recommendation::record_interaction,
        recommendation::rate_recommendation,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Semesters", description = "Semester management and activation"),
        (name = "Periods", description = "Timetable periods within a semester"),
        (name = "Courses", description = "Course catalogue"),
        (name = "Quizzes", description = "Quizzes and quiz attempts"),
        (name = "Students", description = "Student profiles and academic records"),
        (name = "Enrollments", description = "Course enrollments"),
        (name = "Resources", description = "Learning resources"),
        (name = "Recommendations", description = "Learning recommendations and interactions"),
    ),
    info(
        title = "Academix API",
        version = "1.0.0",
        description = "Education management API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
