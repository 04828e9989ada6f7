use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "service-a";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const SERVICE_DESCRIPTION: &str = "API Gateway Service";
pub const ENDPOINTS: [&str; 3] = ["/api/hello", "/api/info", "/api/backend"];

// /api/hello 响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

impl HelloResponse {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            message: "Hello from Service A".to_string(),
            timestamp,
            service: SERVICE_NAME.to_string(),
        }
    }
}

// /api/info 响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<String>,
}

impl InfoResponse {
    pub fn gateway() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// /api/backend 响应信封，`service_b_response` 原样嵌入 Service B 的 JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendEnvelope {
    pub service_a: String,
    pub service_b_response: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl BackendEnvelope {
    pub fn success(service_b_response: serde_json::Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            service_a: "success".to_string(),
            service_b_response,
            timestamp,
        }
    }
}
