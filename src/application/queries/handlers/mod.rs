//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod health_handlers;
mod user_handlers;

pub use health_handlers::*;
pub use user_handlers::*;
