use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use duo_shared::ErrorDetail;
use tracing::{error, warn};

// 网关错误类型
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 连接失败、超时、DNS 失败等传输层错误
    #[error("Service B unavailable: {0}")]
    BackendUnavailable(#[from] reqwest::Error),

    /// Service B 返回的响应体不是合法 JSON，不属于网关处理的错误，按普通 500 返回
    #[error("Internal error: {0}")]
    Internal(#[from] serde_json::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            GatewayError::BackendUnavailable(e) if e.is_timeout() => {
                warn!("Service B request timed out: {}", e)
            }
            GatewayError::BackendUnavailable(e) => warn!("Service B request failed: {}", e),
            GatewayError::Internal(e) => {
                error!("Internal error: {:?}", e);
                return (status, "Internal Server Error").into_response();
            }
        }

        (status, Json(ErrorDetail::new(self.to_string()))).into_response()
    }
}
