use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::DatabaseError;
use crate::scheduling::{ConflictError, MembershipError, TransitionError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(#[from] ConflictError),

    #[error("{0}")]
    Transition(#[from] TransitionError),

    #[error("{0}")]
    Membership(#[from] MembershipError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(err) => match err {
                DatabaseError::NotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
                DatabaseError::Duplicate => (StatusCode::CONFLICT, "Resource already exists".to_string()),
                DatabaseError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                DatabaseError::Sqlx(err) => {
                    tracing::error!("Unexpected database error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal server error occurred".to_string(),
                    )
                }
            },
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Authorization(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            // Business-rule conflicts are client mistakes, not 409s.
            AppError::Conflict(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Transition(err) => {
                let status = match err {
                    TransitionError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
                    TransitionError::Forbidden { .. } => StatusCode::FORBIDDEN,
                };
                (status, err.to_string())
            }
            AppError::Membership(err) => {
                let status = match err {
                    MembershipError::ForbiddenEditor => StatusCode::FORBIDDEN,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, err.to_string())
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
