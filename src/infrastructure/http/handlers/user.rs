//! User HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::{CreateUser, GetUser, ListUsers, UpdateUser};
use crate::contract::{ApiResponse, UpdateUserRequest, User};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有用户
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;
    Ok(Json(ApiResponse::success(users)))
}

/// 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let Path(user_id) = user_id?;
    let user = state.get_user_handler.handle(GetUser { user_id }).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// 创建用户
///
/// 请求体按原始 JSON 对象接收，必填校验在应用层完成
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let Json(payload) = payload?;
    let user = state
        .create_user_handler
        .handle(CreateUser { payload })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(user).with_message("User created")),
    ))
}

/// 部分更新用户
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    user_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let Path(user_id) = user_id?;
    let Json(changes) = payload?;
    let user = state
        .update_user_handler
        .handle(UpdateUser { user_id, changes })
        .await?;

    Ok(Json(ApiResponse::success(user).with_message("User updated")))
}
