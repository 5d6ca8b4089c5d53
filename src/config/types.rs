//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// API 客户端配置
    #[serde(default)]
    pub client: ClientConfig,

    /// 健康检查配置
    #[serde(default)]
    pub health: HealthConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// API 客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// 服务端根地址（不含 API 前缀）
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API 路径前缀
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// 请求超时时间（毫秒）
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// 健康检查配置
#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    /// 读取部署环境的环境变量名，每次请求时读取
    #[serde(default = "default_environment_var")]
    pub environment_var: String,

    /// 环境变量未设置时的默认值
    #[serde(default = "default_environment")]
    pub default_environment: String,
}

fn default_environment_var() -> String {
    "APP_ENV".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            environment_var: default_environment_var(),
            default_environment: default_environment(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.client.api_prefix, "/api");
        assert_eq!(config.client.timeout_ms, 10_000);
        assert_eq!(config.health.environment_var, "APP_ENV");
        assert_eq!(config.health.default_environment, "development");
    }

    #[test]
    fn test_client_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
