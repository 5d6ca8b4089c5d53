//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod api_client;
mod process_info;

pub use api_client::*;
pub use process_info::SystemProcessInfo;
