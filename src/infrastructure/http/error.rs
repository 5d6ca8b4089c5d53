//! HTTP Error Handling
//!
//! 所有错误都以统一信封返回，`error` 字段携带机器可读的错误码

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::ApplicationError;
use crate::contract::{codes, create_error_response, AppError, HttpStatus};

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed(String),
    Validation(AppError),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> HttpStatus {
        match self {
            ApiError::NotFound(_) => HttpStatus::NotFound,
            ApiError::BadRequest(_) | ApiError::Validation(_) => HttpStatus::BadRequest,
            ApiError::MethodNotAllowed(_) => HttpStatus::MethodNotAllowed,
            ApiError::Internal(_) => HttpStatus::InternalServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status().code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                create_error_response(msg, Some(codes::NOT_FOUND.to_string()))
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                create_error_response(msg, Some(codes::BAD_REQUEST.to_string()))
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!(error = %msg, "Method not allowed");
                create_error_response(msg, Some(codes::METHOD_NOT_ALLOWED.to_string()))
            }
            ApiError::Validation(err) => {
                tracing::warn!(code = %err.code, error = %err.message, "Validation failed");
                create_error_response(err.message, Some(err.code))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                create_error_response(msg, Some(codes::INTERNAL_ERROR.to_string()))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::Validation(err) => ApiError::Validation(err),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
