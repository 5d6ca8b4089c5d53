//! HTTP Routes
//!
//! API Endpoints:
//! - /health               GET   健康检查
//! - /api/ping             GET   连通性测试
//! - /api/users            GET   列出所有用户
//! - /api/users            POST  创建用户
//! - /api/users/:id        GET   获取用户详情
//! - /api/users/:id        PUT   部分更新用户

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;
use crate::contract::endpoints;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(endpoints::HEALTH, get(handlers::health))
        .nest(endpoints::API_PREFIX, api_routes())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(endpoints::api::PING, get(handlers::ping))
        .route(
            endpoints::api::USERS,
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            endpoints::api::USER,
            get(handlers::get_user).put(handlers::update_user),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
