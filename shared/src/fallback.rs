use axum::{http::StatusCode, response::Json};

use crate::types::ErrorDetail;

/// 未匹配路径
pub async fn not_found() -> (StatusCode, Json<ErrorDetail>) {
    (StatusCode::NOT_FOUND, Json(ErrorDetail::new("Not Found")))
}

/// 路径存在但方法不支持
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorDetail>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDetail::new("Method Not Allowed")),
    )
}
