//! Fallback Handler

use axum::http::{Method, Uri};

use crate::infrastructure::http::error::ApiError;

/// 未匹配路由同样返回错误信封
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route not found: {}", uri.path()))
}

/// 路径存在但方法不支持
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method not allowed: {} {}", method, uri.path()))
}
