use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn, Instrument};

use crate::utils::generate_request_id;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求日志中间件：为每个请求分配 ID，按状态码等级记录耗时，并在响应头中回传 ID
pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = generate_request_id();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
    );

    async move {
        info!("Incoming request: {} {}", method, uri);

        let mut response = next.run(req).await;
        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            info!("Request completed: {} {} - {}ms", method, uri, duration.as_millis());
        } else if status.is_client_error() {
            warn!("Client error: {} {} - {} ({}ms)", method, uri, status, duration.as_millis());
        } else {
            error!("Server error: {} {} - {} ({}ms)", method, uri, status, duration.as_millis());
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
