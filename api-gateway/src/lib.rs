//! Service A: public API gateway in front of Service B.

pub mod app_state;
pub mod backend_client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{middleware, routing::get, Router};
use duo_shared::{fallback, middleware::request_logging};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use app_state::AppState;
pub use self::config::GatewayConfig;
pub use error::GatewayError;

pub fn create_app(app_state: AppState) -> Router {
    // 创建中间件层
    let middleware_layer = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(middleware::from_fn(request_logging));

    Router::new()
        // 健康检查路由
        .route("/health", get(handlers::health::health_check))
        // API 路由
        .route("/api/hello", get(handlers::api::hello))
        .route("/api/info", get(handlers::api::info))
        .route("/api/backend", get(handlers::api::call_backend))
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        // 应用中间件
        .layer(middleware_layer)
        // 添加状态
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn read_body(response: axum::response::Response) -> (StatusCode, Vec<u8>) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn test_app() -> Router {
        let config = GatewayConfig {
            service_b_url: "http://127.0.0.1:1".to_string(),
            ..GatewayConfig::default()
        };
        create_app(AppState::new(config).unwrap())
    }

    async fn send_get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_body(response).await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send_get("/health").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"status": "healthy", "service": "service-a"}));
    }

    #[tokio::test]
    async fn test_hello() {
        let (status, body) = send_get("/api/hello").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Hello from Service A");
        assert_eq!(body["service"], "service-a");
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_info_endpoints_in_order() {
        let (status, body) = send_get("/api/info").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({
                "service": "service-a",
                "version": "1.0.0",
                "description": "API Gateway Service",
                "endpoints": ["/api/hello", "/api/info", "/api/backend"]
            })
        );
    }

    #[tokio::test]
    async fn test_static_endpoints_are_byte_identical() {
        for uri in ["/health", "/api/info"] {
            let (_, first) = send_get(uri).await;
            let (_, second) = send_get(uri).await;
            assert_eq!(first, second, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_backend_unreachable() {
        let (status, body) = send_get("/api/backend").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert!(body["detail"].as_str().unwrap().contains("Service B unavailable"));
    }

    #[tokio::test]
    async fn test_unknown_path_and_method() {
        let (status, body) = send_get("/api/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"detail": "Not Found"}));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let (status, body) = read_body(response).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"detail": "Method Not Allowed"}));
    }
}
