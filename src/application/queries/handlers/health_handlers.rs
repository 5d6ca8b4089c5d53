//! Health Query Handler

use std::sync::Arc;

use crate::application::ports::ProcessInfoPort;
use crate::application::queries::CheckHealth;
use crate::contract::{format_date, HealthCheckResponse};

/// 健康检查固定提示
pub const HEALTHY_MESSAGE: &str = "Backend server is healthy";

/// CheckHealth Handler
///
/// 输出只取决于注入的 [`ProcessInfoPort`]
pub struct HealthCheckHandler {
    process_info: Arc<dyn ProcessInfoPort>,
}

impl HealthCheckHandler {
    pub fn new(process_info: Arc<dyn ProcessInfoPort>) -> Self {
        Self { process_info }
    }

    pub fn handle(&self, _query: CheckHealth) -> HealthCheckResponse {
        HealthCheckResponse {
            success: true,
            message: HEALTHY_MESSAGE.to_string(),
            timestamp: format_date(self.process_info.now()),
            uptime: self.process_info.uptime_secs(),
            environment: self.process_info.environment(),
        }
    }
}
