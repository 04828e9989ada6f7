//! Service B: synthetic processing backend.

pub mod config;
pub mod handlers;
pub mod models;

use axum::{middleware, routing::get, Router};
use duo_shared::{fallback, middleware::request_logging};
use tower_http::trace::TraceLayer;

pub use self::config::BackendConfig;

pub fn create_app() -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/process", get(handlers::process))
        .route("/internal/status", get(handlers::internal_status))
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
}
