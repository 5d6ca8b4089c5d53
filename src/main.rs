//! Quickstack 后端服务
//!
//! - /health 健康检查
//! - /api/ping, /api/users 业务接口

use std::sync::Arc;

use quickstack::config::{load_config, print_config};
use quickstack::contract::RandomIdGenerator;
use quickstack::infrastructure::http::{AppState, HttpServer, ServerConfig};
use quickstack::infrastructure::{InMemoryUserDirectory, SystemProcessInfo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},quickstack={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Quickstack backend");
    print_config(&config);

    // 进程信息在启动时创建，运行时长从此刻起算
    let process_info = Arc::new(SystemProcessInfo::from_config(&config.health));
    let users = Arc::new(InMemoryUserDirectory::new());

    let state = AppState::new(users, process_info, Arc::new(RandomIdGenerator));
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
