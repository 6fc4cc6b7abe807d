#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use pulseboard_model::Catalog;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

mod config;
mod http;
mod middleware;
mod telemetry;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use telemetry::RequestMetrics;

pub const CRATE_NAME: &str = "pulseboard-server";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<ServerConfig>,
    pub metrics: Arc<RequestMetrics>,
    pub ready: Arc<AtomicBool>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: Catalog, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            metrics: Arc::new(RequestMetrics::default()),
            ready: Arc::new(AtomicBool::new(true)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .route("/api/version", get(http::handlers::version_handler))
        .route("/api/openapi.json", get(http::handlers::openapi_handler))
        .route("/api/services", get(http::handlers::services_handler))
        .route("/api/services/:id", get(http::handlers::service_handler))
        .route(
            "/api/services/:id/quality",
            get(http::handlers::service_quality_handler),
        )
        .route(
            "/api/services/:id/health",
            get(http::handlers::service_health_handler),
        )
        .route(
            "/api/services/:id/release-readiness",
            get(http::handlers::release_readiness_handler),
        )
        .route("/api/directors", get(http::handlers::directors_handler))
        .route("/api/overview", get(http::handlers::overview_handler))
        .fallback(http::handlers::fallback_handler)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
