use chrono::{DateTime, Utc};
use uuid::Uuid;

// 时间工具函数
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

// 请求 ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
