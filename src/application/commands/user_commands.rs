//! User Commands

use serde_json::{Map, Value};

use crate::contract::UpdateUserRequest;

/// 创建用户命令
///
/// 保留原始 JSON 对象，由处理器负责校验和转换
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub payload: Map<String, Value>,
}

/// 更新用户命令
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: String,
    pub changes: UpdateUserRequest,
}
