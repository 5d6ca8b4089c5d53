//! Response Builders
//!
//! 构造统一响应信封和时间戳字符串

use chrono::{DateTime, SecondsFormat, Utc};

use super::types::ApiResponse;

/// 构造响应信封，不校验 `data` 的结构
pub fn create_api_response<T>(data: T, success: bool, message: Option<String>) -> ApiResponse<T> {
    ApiResponse {
        success,
        data,
        message,
        error: None,
    }
}

/// 构造错误响应
///
/// 跨边界表达错误的唯一方式，`data` 固定为 null
pub fn create_error_response(
    message: impl Into<String>,
    error: Option<String>,
) -> ApiResponse<()> {
    ApiResponse {
        success: false,
        data: (),
        message: Some(message.into()),
        error,
    }
}

/// ISO-8601 格式，毫秒精度，`Z` 后缀
pub fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 当前时间的 [`format_date`]
pub fn format_now() -> String {
    format_date(Utc::now())
}
