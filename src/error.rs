/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - RepoError / validation error / auth error を統一的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden: {reason}")]
    Forbidden { reason: &'static str },
    #[error("validation failed")]
    Validation { messages: Vec<String> },
    #[error("product not found: {id}")]
    NotFound { id: Uuid },
    #[error("unsupported api version: {version}")]
    UnsupportedVersion { version: String },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "unauthorized".to_string(),
                None,
            ),
            AppError::Forbidden { reason } => {
                (StatusCode::FORBIDDEN, "forbidden", reason.to_string(), None)
            }
            AppError::Validation { messages } => (
                StatusCode::BAD_REQUEST,
                "validation_failed",
                "validation failed".to_string(),
                Some(messages),
            ),
            AppError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("No product found with id '{id}'."),
                None,
            ),
            AppError::UnsupportedVersion { version } => (
                StatusCode::NOT_ACCEPTABLE,
                "unsupported_version",
                format!("API version '{version}' is not supported."),
                None,
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Duplicate => {
                AppError::validation(vec!["a product with this id already exists".to_string()])
            }
            RepoError::Db(_) => AppError::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_contains_the_id() {
        let id = Uuid::new_v4();
        let response = AppError::not_found(id).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_repo_error_maps_to_validation() {
        let err = AppError::from(RepoError::Duplicate);
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
