//! Ping Handler

use axum::Json;

use crate::contract::{create_api_response, ApiResponse};

/// Ping endpoint - 连通性测试
pub async fn ping() -> Json<ApiResponse<String>> {
    Json(create_api_response(
        "pong".to_string(),
        true,
        Some(format!("quickstack {}", env!("CARGO_PKG_VERSION"))),
    ))
}
