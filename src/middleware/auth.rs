use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::db::{UserRepository, UserRole};
use crate::error::AppError;

/// The authenticated actor behind a request. Resolved from the bearer token
/// by the extractor below and passed explicitly into every guard; token
/// issuance is handled by an external service and out of scope here.
#[derive(Debug, Clone, Copy)]
pub struct Principal {
    pub id: Uuid,
    pub role: UserRole,
}

impl Principal {
    pub fn require(self, role: UserRole) -> Result<Self, AppError> {
        if self.role == role {
            Ok(self)
        } else {
            Err(AppError::Authorization(format!(
                "This action requires the {role} role"
            )))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing bearer token".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Malformed authorization header".to_string()))?;

        let (id, role) = UserRepository::find_by_session_token(&state.db, token)
            .await?
            .ok_or_else(|| AppError::Authentication("Unknown session token".to_string()))?;

        Ok(Principal { id, role })
    }
}
