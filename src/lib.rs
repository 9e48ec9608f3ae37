//! # mission-poster
//!
//! Turns an uploaded photo into a 1080×1080 event poster: gradient backdrop,
//! branding, the photo in a circular frame and a randomly drawn result caption.
//!
//! ```text
//! POST /analyze ──> handlers ──> PosterService ──> poster::compose
//!                                 │  (store upload, pick result)
//!                                 └─> static/generated/<token>.png
//! ```

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod app_state;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod poster;
pub mod services;

use app_state::AppState;
use constants::MAX_UPLOAD_SIZE;

/// Full application router, without connection-level layers such as rate limiting
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let public_prefix = state.config.public_prefix.clone();

    Router::new()
        // Frontend routes
        .route("/", get(handlers::serve_index))
        .route("/analyze", post(handlers::analyze))
        // API routes
        .route("/api/health", get(handlers::health))
        .route("/api/analyze", post(handlers::api_analyze))
        // Static files, including uploads and generated posters
        .nest_service(&public_prefix, ServeDir::new(static_dir))
        // API docs
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", handlers::ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .layer(axum_middleware::from_fn(middleware::security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
