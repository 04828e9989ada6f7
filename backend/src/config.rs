use duo_shared::{ServerConfig, ServiceConfig};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8001;

// Backend 服务配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    #[serde(flatten)]
    pub server: ServerConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::with_port(DEFAULT_PORT),
        }
    }
}

impl ServiceConfig for BackendConfig {
    const SERVICE: &'static str = "backend";

    fn validate(&self) -> Result<(), duo_shared::ConfigError> {
        if self.server.workers == 0 {
            return Err(duo_shared::ConfigError::Invalid(
                "WORKERS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
