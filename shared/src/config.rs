use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::{de::DeserializeOwned, Serialize};
use std::env;

// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// 服务配置。`Default` 提供最底层的默认值，之后依次被配置文件和环境变量覆盖。
pub trait ServiceConfig: Default + Serialize + DeserializeOwned {
    /// 服务名，同时决定配置文件名 `config/<SERVICE>`
    const SERVICE: &'static str;

    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

pub fn load_config<T: ServiceConfig>() -> Result<T, ConfigError> {
    // 加载 .env 文件
    dotenv().ok();

    load_config_from(Environment::default())
}

/// 使用给定的环境变量源构建配置，测试里可以通过 `Environment::source` 注入变量。
pub fn load_config_from<T: ServiceConfig>(environment: Environment) -> Result<T, ConfigError> {
    let profile = env::var("ENV").unwrap_or_else(|_| "development".to_string());

    let settings = Config::builder()
        // 默认值
        .add_source(Config::try_from(&T::default())?)
        // 服务配置文件
        .add_source(File::with_name(&format!("config/{}", T::SERVICE)).required(false))
        // 环境特定配置文件
        .add_source(File::with_name(&format!("config/{}.{}", T::SERVICE, profile)).required(false))
        // 环境变量，例如 PORT、SERVICE_B_URL
        .add_source(environment.try_parsing(true))
        .build()?;

    let config: T = settings.try_deserialize()?;

    // 验证必要配置
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServerConfig;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct DemoConfig {
        #[serde(flatten)]
        server: ServerConfig,
        upstream: String,
    }

    impl Default for DemoConfig {
        fn default() -> Self {
            Self {
                server: ServerConfig::with_port(9000),
                upstream: "http://localhost:9001".to_string(),
            }
        }
    }

    impl ServiceConfig for DemoConfig {
        const SERVICE: &'static str = "demo-service";

        fn validate(&self) -> Result<(), ConfigError> {
            if self.upstream.is_empty() {
                return Err(ConfigError::Invalid("upstream cannot be empty".to_string()));
            }
            Ok(())
        }
    }

    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(map))
    }

    #[test]
    fn test_defaults_without_environment() {
        let config: DemoConfig = load_config_from(env_of(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_environment_overrides() {
        let config: DemoConfig = load_config_from(env_of(&[
            ("PORT", "9100"),
            ("HOST", "127.0.0.1"),
            ("UPSTREAM", "http://upstream:80"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.bind_address(), "127.0.0.1:9100");
        assert_eq!(config.upstream, "http://upstream:80");
    }

    #[test]
    fn test_validation_failure() {
        let result: Result<DemoConfig, _> = load_config_from(env_of(&[("UPSTREAM", "")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_invalid_port_is_load_error() {
        let result: Result<DemoConfig, _> = load_config_from(env_of(&[("PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
