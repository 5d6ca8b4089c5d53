//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod process_info;
mod repositories;

pub use process_info::ProcessInfoPort;
pub use repositories::{RepositoryError, UserDirectoryPort, UserMutation};
