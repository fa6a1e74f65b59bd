use crate::error::ApiError;
use axum::Extension;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

/// Claims extracted from a validated bearer JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiClaims {
    pub sub: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl ApiClaims {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ADMIN_ROLE)
    }
}

/// Gates mutation routes to tokens carrying the admin role
pub async fn require_admin(
    Extension(claims): Extension<ApiClaims>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}
