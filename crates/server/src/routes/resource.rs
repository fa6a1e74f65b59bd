use crate::dtos::resource::{ResourceRequest, ResourceResponse};
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::{Extension, Json, extract::Path};
use database::services::learning_resource::{LearningResourceInput, LearningResourceService};
use sea_orm::{DatabaseConnection, prelude::Uuid};

/// List all learning resources
#[utoipa::path(
    get,
    path = "/resources",
    responses(
        (status = 200, description = "List of learning resources", body = Vec<ResourceResponse>),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Resources"
)]
pub async fn get_resources(
    Extension(db): Extension<DatabaseConnection>,
) -> Result<Json<Vec<ResourceResponse>>, ApiError> {
    let resources = LearningResourceService::list(&db).await?;

    Ok(Json(resources.into_iter().map(Into::into).collect()))
}

/// Get a specific learning resource by ID
#[utoipa::path(
    get,
    path = "/resources/{id}",
    params(
        ("id" = Uuid, Path, description = "Learning resource ID")
    ),
    responses(
        (status = 200, description = "Learning resource found", body = ResourceResponse),
        (status = 404, description = "Learning resource not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Resources"
)]
pub async fn get_resource_by_id(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let resource = LearningResourceService::get(&db, id).await?;

    Ok(Json(resource.into()))
}

/// Register a learning resource
#[utoipa::path(
    post,
    path = "/resources",
    request_body = ResourceRequest,
    responses(
        (status = 201, description = "Learning resource created", body = ResourceResponse),
        (status = 400, description = "Invalid resource data"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Resources"
)]
pub async fn create_resource(
    Extension(db): Extension<DatabaseConnection>,
    Json(request): Json<ResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    let input = LearningResourceInput {
        title: request.title,
        url: request.url,
        resource_type: request.resource_type,
        topic: request.topic,
    };

    let resource = LearningResourceService::create(&db, input).await?;

    Ok((StatusCode::CREATED, Json(resource.into())))
}
