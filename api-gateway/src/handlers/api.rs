use axum::{extract::State, response::Json};
use duo_shared::now_utc;
use tracing::info;

use crate::app_state::AppState;
use crate::error::GatewayError;
use crate::models::{BackendEnvelope, HelloResponse, InfoResponse};

/// GET /api/hello
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse::new(now_utc()))
}

/// GET /api/info
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::gateway())
}

/// GET /api/backend - 调用 Service B 并包装其响应
///
/// 客户端断开时 axum 会丢弃这个 future，进行中的出站请求随之取消。
pub async fn call_backend(
    State(state): State<AppState>,
) -> Result<Json<BackendEnvelope>, GatewayError> {
    let body = state.backend.process().await?;
    info!("Service B call succeeded: {}", state.backend.process_url());

    Ok(Json(BackendEnvelope::success(body, now_utc())))
}
