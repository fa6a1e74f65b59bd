use database::entities::learning_resource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    #[schema(example = "video")]
    pub resource_type: String,
    pub topic: String,
}

impl From<learning_resource::Model> for ResourceResponse {
    fn from(model: learning_resource::Model) -> Self {
        ResourceResponse {
            id: model.id.to_string(),
            title: model.title,
            url: model.url,
            resource_type: model.resource_type,
            topic: model.topic,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResourceRequest {
    pub title: String,
    pub url: String,
    #[schema(example = "video")]
    pub resource_type: String,
    pub topic: String,
}
