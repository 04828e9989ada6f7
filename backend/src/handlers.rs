use axum::response::Json;
use duo_shared::{now_utc, HealthStatus};
use tracing::debug;

use crate::models::{InternalStatus, ProcessResult, SERVICE_NAME};

/// GET /health
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy(SERVICE_NAME))
}

/// GET /process
pub async fn process() -> Json<ProcessResult> {
    let result = ProcessResult::simulate(&mut rand::thread_rng(), now_utc());

    debug!(
        "Processed {} items in simulated {}",
        result.data.items_processed, result.processing_time
    );

    Json(result)
}

/// GET /internal/status
pub async fn internal_status() -> Json<InternalStatus> {
    Json(InternalStatus::running())
}
