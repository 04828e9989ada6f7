use duo_shared::{ConfigError, ServerConfig, ServiceConfig};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SERVICE_B_URL: &str = "http://localhost:8001";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 5;

/// API Gateway 配置
///
/// 环境变量：`HOST`、`PORT`、`WORKERS`、`SERVICE_B_URL`、`BACKEND_TIMEOUT_SECS`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    #[serde(flatten)]
    pub server: ServerConfig,
    /// Service B 的基础地址
    pub service_b_url: String,
    /// 调用 Service B 的总超时（秒）
    pub backend_timeout_secs: u64,
}

impl GatewayConfig {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::with_port(DEFAULT_PORT),
            service_b_url: DEFAULT_SERVICE_B_URL.to_string(),
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig for GatewayConfig {
    const SERVICE: &'static str = "api-gateway";

    fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.service_b_url).map_err(|e| {
            ConfigError::Invalid(format!("SERVICE_B_URL '{}' is not a valid URL: {}", self.service_b_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "SERVICE_B_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.backend_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "BACKEND_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(ConfigError::Invalid(
                "WORKERS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
