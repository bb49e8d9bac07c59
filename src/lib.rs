pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetcher;
pub mod models;
pub mod orchestrator;
pub mod platform;
pub mod prompts;
pub mod provider;
pub mod routes;

use axum::{Router, routing::{get, post}};
use tower_http::cors::{Any, CorsLayer};

pub use error::{Error, Result};
pub use orchestrator::TaskOrchestrator;
pub use routes::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(routes::provider_status))
        .route("/api/product/analyze", post(routes::analyze_product))
        .route("/api/copy", post(routes::generate_copy))
        .route("/api/copy/batch", post(routes::generate_copies))
        .route("/api/copy/export", post(routes::export_copies))
        .route("/api/audience", post(routes::analyze_audience))
        .route("/api/audience/by-url", post(routes::analyze_audience_by_url))
        .route("/api/video-script", post(routes::generate_video_script))
        .route("/api/video-script/shooting-list", post(routes::export_shooting_list))
        .route("/api/fb-ads", post(routes::generate_fb_ads))
        .route("/api/platform", post(routes::convert_platform))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
