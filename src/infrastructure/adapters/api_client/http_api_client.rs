//! HTTP API Client - 调用后端 REST 接口
//!
//! 无状态封装，所有响应按共享契约解码:
//! GET  /health            -> HealthCheckResponse
//! GET  /api/ping          -> ApiResponse<String>
//! GET  /api/users         -> ApiResponse<Vec<User>>
//! GET  /api/users/{id}    -> ApiResponse<User>
//! POST /api/users         -> ApiResponse<User>
//! PUT  /api/users/{id}    -> ApiResponse<User>

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::error::ClientError;
use crate::config::ClientConfig;
use crate::contract::{
    endpoints, ApiResponse, CreateUserRequest, HealthCheckResponse, UpdateUserRequest, User,
};

/// HTTP API 客户端配置
#[derive(Debug, Clone)]
pub struct HttpApiClientConfig {
    /// 服务端根地址
    pub base_url: String,
    /// API 路径前缀
    pub api_prefix: String,
    /// 整体请求超时
    pub timeout: Duration,
}

impl Default for HttpApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            api_prefix: "/api".to_string(),
            timeout: Duration::from_millis(10_000),
        }
    }
}

impl HttpApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ClientConfig> for HttpApiClientConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_prefix: config.api_prefix.clone(),
            timeout: config.timeout(),
        }
    }
}

/// HTTP API 客户端
pub struct HttpApiClient {
    client: Client,
    config: HttpApiClientConfig,
}

impl HttpApiClient {
    /// 创建新的客户端，超时和默认请求头在此固定
    pub fn new(config: HttpApiClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 服务端根路径下的 URL
    fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// API 前缀下的 URL
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_prefix.trim_end_matches('/'),
            path
        )
    }

    /// 单个用户的 URL，id 作为一个路径段进行百分号编码
    fn user_url(&self, id: &str) -> Result<String, ClientError> {
        let mut url = Url::parse(&self.api_url(endpoints::api::USERS))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot be a base", self.config.base_url))
            })?
            .push(id);
        Ok(url.into())
    }

    /// 健康检查（不经过 API 前缀）
    pub async fn check_health(&self) -> Result<HealthCheckResponse, ClientError> {
        let url = self.root_url(endpoints::HEALTH);
        self.execute(Method::GET, url, |req| req).await
    }

    /// 连通性测试
    pub async fn ping(&self) -> Result<ApiResponse<String>, ClientError> {
        let url = self.api_url(endpoints::api::PING);
        self.execute(Method::GET, url, |req| req).await
    }

    /// 列出所有用户
    pub async fn get_users(&self) -> Result<ApiResponse<Vec<User>>, ClientError> {
        let url = self.api_url(endpoints::api::USERS);
        self.execute(Method::GET, url, |req| req).await
    }

    /// 获取单个用户
    pub async fn get_user(&self, id: &str) -> Result<ApiResponse<User>, ClientError> {
        let url = self.user_url(id)?;
        self.execute(Method::GET, url, |req| req).await
    }

    /// 创建用户
    pub async fn create_user(
        &self,
        user: &CreateUserRequest,
    ) -> Result<ApiResponse<User>, ClientError> {
        let url = self.api_url(endpoints::api::USERS);
        self.execute(Method::POST, url, |req| with_json(req, user))
            .await
    }

    /// 部分更新用户
    pub async fn update_user(
        &self,
        id: &str,
        changes: &UpdateUserRequest,
    ) -> Result<ApiResponse<User>, ClientError> {
        let url = self.user_url(id)?;
        self.execute(Method::PUT, url, |req| with_json(req, changes))
            .await
    }

    async fn execute<T, F>(&self, method: Method, url: String, build: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        tracing::info!(method = %method, url = %url, "Sending API request");

        let result = self.round_trip(method.clone(), &url, build).await;
        if let Err(err) = &result {
            tracing::error!(method = %method, url = %url, error = %err, "API request failed");
        }
        result
    }

    async fn round_trip<T, F>(&self, method: Method, url: &str, build: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let response = build(self.client.request(method, url))
            .send()
            .await
            .map_err(ClientError::from_reqwest)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::from_reqwest)?;

        if !status.is_success() {
            return Err(remote_error(status, &body));
        }

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

fn with_json<B: Serialize + ?Sized>(request: RequestBuilder, body: &B) -> RequestBuilder {
    request.json(body)
}

/// 从错误响应中提取远端提示
///
/// 优先使用信封的 `message`/`error`，其次是原始响应体，最后是状态码描述
fn remote_error(status: StatusCode, body: &[u8]) -> ClientError {
    let envelope = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body).ok();
    let code = envelope.as_ref().and_then(|e| e.error.clone());

    let message = envelope
        .and_then(|e| e.message.or(e.error))
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    ClientError::Remote {
        status: status.as_u16(),
        message,
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpApiClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn test_config_builder() {
        let config =
            HttpApiClientConfig::new("http://example.com:9000").with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_config_from_app_config() {
        let app = ClientConfig {
            base_url: "http://backend:8080".to_string(),
            api_prefix: "/v1".to_string(),
            timeout_ms: 2500,
        };
        let config = HttpApiClientConfig::from(&app);
        assert_eq!(config.api_prefix, "/v1");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_urls_match_endpoints() {
        let client = HttpApiClient::new(HttpApiClientConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(client.root_url(endpoints::HEALTH), "http://localhost:3000/health");
        assert_eq!(
            client.api_url(endpoints::api::USERS),
            format!("http://localhost:3000{}", endpoints::USERS)
        );
        assert_eq!(
            client.api_url(endpoints::api::PING),
            format!("http://localhost:3000{}", endpoints::PING)
        );
        assert_eq!(
            client.user_url("abc").unwrap(),
            format!("http://localhost:3000{}/abc", endpoints::USERS)
        );
    }

    #[test]
    fn test_user_url_encodes_id_as_one_segment() {
        let client = HttpApiClient::new(HttpApiClientConfig::new("http://localhost:3000")).unwrap();
        assert_eq!(
            client.user_url("a/b?c#d%").unwrap(),
            "http://localhost:3000/api/users/a%2Fb%3Fc%23d%25"
        );
    }

    #[test]
    fn test_user_url_rejects_unusable_base() {
        let client = HttpApiClient::new(HttpApiClientConfig::new("not a url")).unwrap();
        assert!(matches!(client.user_url("1"), Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_remote_error_prefers_envelope_message() {
        let body = br#"{"success":false,"data":null,"message":"User not found: x","error":"NOT_FOUND"}"#;
        match remote_error(StatusCode::NOT_FOUND, body) {
            ClientError::Remote {
                status,
                message,
                code,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "User not found: x");
                assert_eq!(code.as_deref(), Some("NOT_FOUND"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_remote_error_falls_back_to_body_then_reason() {
        let err = remote_error(StatusCode::BAD_GATEWAY, b"upstream down");
        assert!(matches!(err, ClientError::Remote { ref message, .. } if message == "upstream down"));

        let err = remote_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert!(
            matches!(err, ClientError::Remote { ref message, code: None, .. } if message == "Service Unavailable")
        );
        assert_eq!(err.status(), Some(503));
    }
}
