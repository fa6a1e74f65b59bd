use axum::{
    Extension, Router, middleware,
    routing::{delete, get, post, put},
};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::ApiClaims;
use crate::doc::ApiDoc;
use crate::routes::{
    course, enrollment, health, period, quiz, recommendation, resource, root, semester, student,
};
use crate::utils::shutdown::shutdown_signal;

mod auth;
mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let issuer_url =
        std::env::var("OIDC_ISSUER_URL").expect("OIDC_ISSUER_URL environment variable is not set");

    let oauth2_resource_server = OAuth2ResourceServer::<ApiClaims>::builder()
        .issuer_url(issuer_url)
        .build()
        .await
        .expect("Failed to build OAuth2ResourceServer");

    let db = database::db::create_connection()
        .await
        .expect("Failed to connect to the database");

    // Mutation routes that require the admin role on the token
    let admin_routes = Router::new()
        .route("/semesters", post(semester::create_semester))
        .route("/semesters/{id}", put(semester::update_semester))
        .route("/semesters/{id}", delete(semester::delete_semester))
        .route("/periods", post(period::create_period))
        .route("/periods/{id}", put(period::update_period))
        .route("/periods/{id}", delete(period::delete_period))
        .route("/courses", post(course::create_course))
        .route("/quizzes", post(quiz::create_quiz))
        .route("/students", post(student::create_student))
        .route("/enrollments", post(enrollment::create_enrollment))
        .route(
            "/enrollments/{id}/withdraw",
            post(enrollment::withdraw_enrollment),
        )
        .route(
            "/enrollments/{id}/complete",
            post(enrollment::complete_enrollment),
        )
        .route("/resources", post(resource::create_resource))
        .route(
            "/recommendations",
            post(recommendation::create_recommendation),
        )
        .route_layer(middleware::from_fn(auth::require_admin));

    let authenticated_routes = Router::new()
        .route("/semesters", get(semester::get_semesters))
        .route("/semesters/active", get(semester::get_active_semester))
        .route("/semesters/{id}", get(semester::get_semester_by_id))
        .route("/periods", get(period::get_periods))
        .route(
            "/periods/semester/{semester_id}",
            get(period::get_periods_by_semester),
        )
        .route("/periods/{id}", get(period::get_period_by_id))
        .route("/courses", get(course::get_courses))
        .route("/courses/{id}", get(course::get_course_by_id))
        .route("/courses/{id}/quizzes", get(course::get_course_quizzes))
        .route("/quizzes", get(quiz::get_quizzes))
        .route("/quizzes/attempts", get(quiz::get_attempts))
        .route("/quizzes/attempts/start", post(quiz::start_attempt))
        .route("/quizzes/attempts/{id}", get(quiz::get_attempt_by_id))
        .route("/quizzes/attempts/{id}/submit", post(quiz::submit_attempt))
        .route("/quizzes/{id}", get(quiz::get_quiz_by_id))
        .route("/students", get(student::get_students))
        .route("/students/{id}", get(student::get_student_by_id))
        .route("/students/{id}/records", get(student::get_student_records))
        .route("/enrollments", get(enrollment::get_enrollments))
        .route("/resources", get(resource::get_resources))
        .route("/resources/{id}", get(resource::get_resource_by_id))
        .route("/recommendations", get(recommendation::get_recommendations))
        .route(
            "/recommendations/{id}",
            get(recommendation::get_recommendation_by_id),
        )
        .route(
            "/recommendations/{id}/interactions",
            post(recommendation::record_interaction),
        )
        .route(
            "/recommendations/{id}/rating",
            post(recommendation::rate_recommendation),
        )
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(oauth2_resource_server.into_layer())
                .layer(Extension(db)),
        );

    let app = Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .merge(authenticated_routes)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
