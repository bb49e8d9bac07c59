use axum::{Json, extract::State, http::{header, StatusCode}, response::{IntoResponse, Response}};
use std::sync::Arc;

use crate::{
    config::ProviderStatus,
    export::{copies_to_csv, shooting_list},
    models::{
        AnalyzeUrlRequest, AudienceAnalysis, AudienceRequest, BatchCopyRequest, CopyRequest, ExportCopiesRequest,
        FbAdsRequest, Generated, GeneratedCopy, PlatformContent, PlatformRequest, ProductInfo, ValidatedAd,
        VideoScript, VideoScriptRequest,
    },
    orchestrator::{validate_ad_format, TaskOrchestrator},
    platform::convert_to_platform,
};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<TaskOrchestrator>,
    pub status: Arc<ProviderStatus>,
}

pub async fn provider_status(State(state): State<AppState>) -> Json<ProviderStatus> {
    Json((*state.status).clone())
}

pub async fn analyze_product(State(state): State<AppState>, Json(body): Json<AnalyzeUrlRequest>) -> Json<Generated<ProductInfo>> {
    tracing::info!("🚀 Analyzing product URL: {}", body.url);
    Json(state.orchestrator.analyze_product_from_url(&body.url).await)
}

pub async fn generate_copy(State(state): State<AppState>, Json(body): Json<CopyRequest>) -> Json<Generated<GeneratedCopy>> {
    Json(state.orchestrator.generate_copy(&body.product, body.copy_type).await)
}

pub async fn generate_copies(
    State(state): State<AppState>,
    Json(body): Json<BatchCopyRequest>,
) -> Result<Json<Vec<Generated<GeneratedCopy>>>, StatusCode> {
    if body.copy_types.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let copies = state.orchestrator.generate_copies(&body.product, &body.copy_types).await;
    let degraded = copies.iter().filter(|c| c.is_degraded()).count();
    tracing::info!("✅ Generated {} copies ({} from mock data)", copies.len(), degraded);
    Ok(Json(copies))
}

pub async fn export_copies(Json(body): Json<ExportCopiesRequest>) -> Response {
    let csv = copies_to_csv(&body.copies);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"copies.csv\""),
        ],
        csv,
    )
        .into_response()
}

pub async fn analyze_audience(State(state): State<AppState>, Json(body): Json<AudienceRequest>) -> Json<Generated<AudienceAnalysis>> {
    Json(state.orchestrator.analyze_audience(&body.product).await)
}

pub async fn analyze_audience_by_url(State(state): State<AppState>, Json(body): Json<AnalyzeUrlRequest>) -> Json<Generated<AudienceAnalysis>> {
    Json(state.orchestrator.analyze_audience_by_url(&body.url).await)
}

pub async fn generate_video_script(State(state): State<AppState>, Json(body): Json<VideoScriptRequest>) -> Json<VideoScript> {
    Json(state.orchestrator.generate_video_script(&body.product, body.style, body.duration))
}

pub async fn export_shooting_list(Json(script): Json<VideoScript>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        shooting_list(&script),
    )
        .into_response()
}

pub async fn generate_fb_ads(State(state): State<AppState>, Json(body): Json<FbAdsRequest>) -> Json<Vec<ValidatedAd>> {
    let ads = state
        .orchestrator
        .generate_fb_ads(&body.product, body.count)
        .into_iter()
        .map(|ad| ValidatedAd { validation: validate_ad_format(&ad), ad })
        .collect();
    Json(ads)
}

pub async fn convert_platform(Json(body): Json<PlatformRequest>) -> Json<PlatformContent> {
    Json(convert_to_platform(&body.product, &body.copy, body.platform))
}
