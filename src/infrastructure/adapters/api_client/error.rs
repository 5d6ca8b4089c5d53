//! API Client Errors

use thiserror::Error;

/// 客户端错误
///
/// 远端返回的错误尽量保留其信封中的提示，否则使用本地传输错误信息
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Remote {
        status: u16,
        message: String,
        /// 信封中的 `error` 字段
        code: Option<String>,
    },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// 远端状态码，传输层错误时为 None
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Transport(format!("Cannot connect to server: {}", err))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
