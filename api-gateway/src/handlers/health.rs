use axum::response::Json;
use duo_shared::HealthStatus;

use crate::models::SERVICE_NAME;

/// 负载均衡器使用的健康检查
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy(SERVICE_NAME))
}
