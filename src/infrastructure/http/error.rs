//! HTTP Error Handling
//!
//! 所有错误在这里按类型归一化为 JSON 响应：
//! 校验错误 400，资源不存在 404，其他一律 500 且不泄露内部细节

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

/// 客户端可见的错误文案
pub mod message {
    pub const NO_JSON_DATA: &str = "No JSON data provided";
    pub const MISSING_FIELDS: &str = "Missing required fields: name, email, role";
    pub const INVALID_FIELD_TYPES: &str = "Invalid field types: name, email, role must be strings";
    pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
    pub const URL_NOT_FOUND: &str = "The requested URL was not found on the server";
    pub const PAYLOAD_TOO_LARGE: &str = "Request body too large";
    pub const INTERNAL_ERROR: &str = "Internal server error";
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体或字段校验失败
    BadRequest(String),
    /// 引用的资源不存在
    NotFound(String),
    /// 未映射的路由
    RouteNotFound,
    /// 请求体超过大小上限
    PayloadTooLarge,
    /// 处理器内部错误，包括 panic（内容只写日志）
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_message(message::RESOURCE_NOT_FOUND, message::URL_NOT_FOUND),
            ),
            ApiError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new(message::PAYLOAD_TOO_LARGE),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_message(message::INTERNAL_ERROR, message::UNEXPECTED_ERROR),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, .. } => {
                ApiError::NotFound(format!("{} not found", resource_type))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}
