//! Shared Contract - 前后端共享契约
//!
//! 服务端和客户端独立部署，但都以这里的类型和规则为准：
//! - types: 实体、响应信封、健康检查、错误结构
//! - endpoints: 固定路径常量
//! - response: 信封构造与时间格式
//! - validation: 输入校验
//! - id: 标识符生成

pub mod endpoints;
mod id;
mod response;
mod types;
mod validation;

pub use id::{generate_id, IdGenerator, RandomIdGenerator};
pub use response::{create_api_response, create_error_response, format_date, format_now};
pub use types::{
    codes, ApiResponse, AppError, CreateUserRequest, HealthCheckResponse,
    HttpStatus, UpdateUserRequest, User,
};
pub use validation::{is_valid_email, sanitize_string, validate_required};
