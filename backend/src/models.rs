use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "service-b";
pub const SERVICE_VERSION: &str = "1.0.0";

/// 模拟处理耗时范围（秒）
pub const PROCESSING_TIME_RANGE: (f64, f64) = (0.1, 0.5);
/// 处理条目数范围（含两端）
pub const ITEMS_PROCESSED_RANGE: (u32, u32) = (10, 100);

// 处理结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessResult {
    pub service: String,
    pub status: String,
    pub processing_time: String,
    pub timestamp: DateTime<Utc>,
    pub data: ProcessData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessData {
    pub result: String,
    pub items_processed: u32,
}

impl ProcessResult {
    /// 生成一次模拟处理结果。耗时只做上报，不会真的等待。
    pub fn simulate<R: Rng + ?Sized>(rng: &mut R, timestamp: DateTime<Utc>) -> Self {
        let (min_time, max_time) = PROCESSING_TIME_RANGE;
        let (min_items, max_items) = ITEMS_PROCESSED_RANGE;

        let processing_time: f64 = rng.gen_range(min_time..=max_time);
        let items_processed = rng.gen_range(min_items..=max_items);

        Self {
            service: SERVICE_NAME.to_string(),
            status: "processed".to_string(),
            processing_time: format_processing_time(processing_time),
            timestamp,
            data: ProcessData {
                result: "success".to_string(),
                items_processed,
            },
        }
    }
}

pub fn format_processing_time(seconds: f64) -> String {
    format!("{:.2}s", seconds)
}

// 内部状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InternalStatus {
    pub service: String,
    pub version: String,
    pub status: String,
    pub uptime: String,
}

impl InternalStatus {
    pub fn running() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            status: "running".to_string(),
            uptime: "healthy".to_string(),
        }
    }
}
