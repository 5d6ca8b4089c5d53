//! Health Handler
//!
//! 进程存活检查，不经过 /api 前缀

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::CheckHealth;
use crate::contract::HealthCheckResponse;
use crate::infrastructure::http::state::AppState;

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthCheckResponse> {
    Json(state.health_handler.handle(CheckHealth))
}
