//! System Process Info - 读取真实进程状态
//!
//! 实现 ProcessInfoPort：运行时长从构造时刻起算，
//! 部署环境每次调用时从环境变量读取，不做缓存

use std::time::Instant;

use crate::application::ports::ProcessInfoPort;
use crate::config::HealthConfig;

/// 系统进程信息
#[derive(Debug, Clone)]
pub struct SystemProcessInfo {
    started: Instant,
    environment_var: String,
    default_environment: String,
}

impl SystemProcessInfo {
    pub fn new(environment_var: impl Into<String>, default_environment: impl Into<String>) -> Self {
        Self {
            started: Instant::now(),
            environment_var: environment_var.into(),
            default_environment: default_environment.into(),
        }
    }

    pub fn from_config(config: &HealthConfig) -> Self {
        Self::new(&config.environment_var, &config.default_environment)
    }
}

impl Default for SystemProcessInfo {
    fn default() -> Self {
        Self::from_config(&HealthConfig::default())
    }
}

impl ProcessInfoPort for SystemProcessInfo {
    fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn environment(&self) -> String {
        std::env::var(&self.environment_var)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.default_environment.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_increases() {
        let info = SystemProcessInfo::default();
        let first = info.uptime_secs();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(info.uptime_secs() > first);
        assert!(first >= 0.0);
    }

    #[test]
    fn test_environment_read_each_call() {
        let var = "QS_TEST_ENV_READ_EACH_CALL";
        let info = SystemProcessInfo::new(var, "development");

        std::env::remove_var(var);
        assert_eq!(info.environment(), "development");

        std::env::set_var(var, "production");
        assert_eq!(info.environment(), "production");

        std::env::remove_var(var);
        assert_eq!(info.environment(), "development");
    }
}
