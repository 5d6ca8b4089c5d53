//! API Endpoints
//!
//! 前后端约定的固定路径，必须逐字保持

/// API 前缀
pub const API_PREFIX: &str = "/api";

/// 健康检查（不在 API 前缀下）
pub const HEALTH: &str = "/health";

/// 用户资源
pub const USERS: &str = "/api/users";

/// 连通性测试
pub const PING: &str = "/api/ping";

/// 相对 [`API_PREFIX`] 的路径，路由嵌套和可配置前缀的客户端使用
pub mod api {
    pub const USERS: &str = "/users";
    pub const USER: &str = "/users/:user_id";
    pub const PING: &str = "/ping";
}
