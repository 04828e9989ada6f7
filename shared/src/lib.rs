//! Types and plumbing shared by the gateway and backend services.

pub mod config;
pub mod fallback;
pub mod middleware;
pub mod shutdown;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use self::config::{load_config, load_config_from, ConfigError, ServiceConfig};
pub use ::config::Environment;
pub use types::{ErrorDetail, HealthStatus, ServerConfig};
pub use utils::{generate_request_id, now_utc};
