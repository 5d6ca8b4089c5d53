//! API Client Adapter - 基于 reqwest 的后端接口客户端

mod error;
mod http_api_client;

pub use error::ClientError;
pub use http_api_client::{HttpApiClient, HttpApiClientConfig};
