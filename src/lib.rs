//! Quickstack - 全栈脚手架
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 共享契约 (contract/):
//! - 实体、响应信封、健康检查结构、固定路径
//! - 校验、信封构造、ID 生成、时间格式
//!
//! 应用层 (application/):
//! - Ports: UserDirectory, ProcessInfo
//! - Commands: 创建/更新用户
//! - Queries: 用户查询、健康检查
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 服务端 RESTful API
//! - Adapters: HTTP API 客户端, 系统进程信息
//! - Memory: 进程内用户目录

pub mod application;
pub mod config;
pub mod contract;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
