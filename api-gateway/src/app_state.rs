use std::sync::Arc;

use crate::backend_client::BackendClient;
use crate::config::GatewayConfig;

/// 应用程序状态，请求之间只共享只读数据
#[derive(Clone)]
pub struct AppState {
    /// 服务配置
    pub config: Arc<GatewayConfig>,
    /// Service B 客户端
    pub backend: Arc<BackendClient>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Result<Self, anyhow::Error> {
        let backend = BackendClient::new(&config.service_b_url, config.backend_timeout())?;

        Ok(Self {
            config: Arc::new(config),
            backend: Arc::new(backend),
        })
    }
}
