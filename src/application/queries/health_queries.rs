//! Health Queries

/// 健康检查查询
#[derive(Debug, Clone, Copy)]
pub struct CheckHealth;
