//! Process Info Port - 进程信息抽象
//!
//! 健康检查依赖的全局进程状态（运行时长、部署环境、当前时间）
//! 通过此端口注入，具体实现在 infrastructure/adapters 层

use chrono::{DateTime, Utc};

/// Process Info Port
pub trait ProcessInfoPort: Send + Sync {
    /// 进程启动至今的秒数
    fn uptime_secs(&self) -> f64;

    /// 部署环境标签，每次调用时重新读取
    fn environment(&self) -> String;

    /// 当前时间
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
