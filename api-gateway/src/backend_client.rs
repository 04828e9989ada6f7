use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::GatewayError;

pub const PROCESS_PATH: &str = "/process";

// Service B 客户端，reqwest::Client 内部自带连接池，整个进程共用一个
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl BackendClient {
    /// `timeout` 覆盖连接、响应头和响应体的整个过程
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn process_url(&self) -> String {
        format!("{}{}", self.base_url, PROCESS_PATH)
    }

    /// 调用 Service B 的 /process，只尝试一次。不检查状态码，响应体按 JSON 原样返回。
    pub async fn process(&self) -> Result<Value, GatewayError> {
        let url = self.process_url();
        debug!("Calling Service B: GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("Service B responded {} ({} bytes)", status, body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}
