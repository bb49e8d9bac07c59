//! Composes fetching, completion and extraction into the console's operations.
//!
//! Every AI-backed operation is total: it always returns data, tagged with the
//! [`Source`](crate::models::Source) that produced it. Without an active
//! provider the prepare/call phases are skipped outright; with one, any failure
//! along the way falls back to the mock catalog.

use chrono::Utc;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog;
use crate::config::{ProviderConfig, Settings};
use crate::error::{Error, Result};
use crate::extract;
use crate::fetcher::ContentFetcher;
use crate::models::{
    AdValidation, AudienceAnalysis, AudienceProfile, CopyText, CopyType, FbAdCreative, Generated,
    GeneratedCopy, MockReason, ProductInfo, VideoScript, VideoStyle,
};
use crate::prompts;
use crate::provider::{ChatCompletionClient, CompletionRequest, ProviderGateway};

pub const DEFAULT_SCRIPT_DURATION: u32 = 15;
pub const DEFAULT_AD_COUNT: usize = 5;
pub const MAX_AD_COUNT: usize = 20;

pub struct TaskOrchestrator {
    gateway: Option<Arc<dyn ProviderGateway>>,
    fetcher: ContentFetcher,
}

impl TaskOrchestrator {
    /// `provider` is the once-selected backend, `None` when no credential exists.
    pub fn new(provider: Option<ProviderConfig>, settings: &Settings) -> Self {
        let gateway = provider.map(|config| {
            Arc::new(ChatCompletionClient::new(config, settings.request_timeout)) as Arc<dyn ProviderGateway>
        });
        let fetcher = ContentFetcher::new(settings.relays.clone(), settings.request_timeout);
        Self { gateway, fetcher }
    }

    pub fn with_gateway(gateway: Option<Arc<dyn ProviderGateway>>, fetcher: ContentFetcher) -> Self {
        Self { gateway, fetcher }
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.gateway.as_deref().map(|g| g.name())
    }

    pub async fn analyze_product_from_url(&self, url: &str) -> Generated<ProductInfo> {
        let Some(gateway) = self.gateway.as_deref() else {
            info!("⚠️ No API key configured, using placeholder product for {}", url);
            return Generated::mock(catalog::placeholder_product(), MockReason::NoCredentials);
        };

        info!("📡 [{}] Analyzing product page: {}", gateway.name(), url);
        match self.analyze_page(gateway, url).await {
            Ok(analyzed) => {
                let mut product = ProductInfo { url: Some(url.to_string()), ..ProductInfo::default() };
                product.merge(analyzed);
                info!("✅ Product analysis complete: {}", product.name);
                Generated::ai(product, gateway.name(), gateway.default_model())
            }
            Err(e) => fallback(catalog::placeholder_product(), "product analysis", e),
        }
    }

    async fn analyze_page(&self, gateway: &dyn ProviderGateway, url: &str) -> Result<ProductInfo> {
        let page_text = self.fetcher.fetch(url).await?;
        let prompt = prompts::product_analysis(&page_text);
        complete_as(gateway, prompt, prompts::PRODUCT_ANALYST_SYSTEM).await
    }

    pub async fn generate_copy(&self, product: &ProductInfo, copy_type: CopyType) -> Generated<GeneratedCopy> {
        let Some(gateway) = self.gateway.as_deref() else {
            info!("⚠️ No API key configured, using mock {} copy", copy_type.as_str());
            let text = catalog::mock_copy(copy_type);
            return Generated::mock(GeneratedCopy::new(product, copy_type, text), MockReason::NoCredentials);
        };

        info!("🤖 [{}] Generating {} copy for: {}", gateway.name(), copy_type.as_str(), product.name);
        let prompt = prompts::copy(copy_type, &product.name, product.description_or_empty());
        match complete_as::<CopyText>(gateway, prompt, prompts::COPYWRITER_SYSTEM).await {
            Ok(text) => {
                info!("✅ {} copy generated", copy_type.as_str());
                Generated::ai(GeneratedCopy::new(product, copy_type, text), gateway.name(), gateway.default_model())
            }
            Err(e) => fallback(catalog::mock_copy(copy_type), "copy generation", e)
                .map(|text| GeneratedCopy::new(product, copy_type, text)),
        }
    }

    /// One independent `generate_copy` per type, results in request order.
    pub async fn generate_copies(&self, product: &ProductInfo, copy_types: &[CopyType]) -> Vec<Generated<GeneratedCopy>> {
        join_all(copy_types.iter().map(|t| self.generate_copy(product, *t))).await
    }

    pub async fn analyze_audience(&self, product: &ProductInfo) -> Generated<AudienceAnalysis> {
        let Some(gateway) = self.gateway.as_deref() else {
            info!("⚠️ No API key configured, using mock audience analysis");
            return Generated::mock(AudienceAnalysis::from(catalog::mock_audience(&product.name)), MockReason::NoCredentials);
        };

        info!("🤖 [{}] Analyzing audience for: {}", gateway.name(), product.name);
        let prompt = prompts::audience(&product.name, product.description_or_empty());
        match complete_as::<AudienceProfile>(gateway, prompt, prompts::MARKET_ANALYST_SYSTEM).await {
            Ok(profile) => {
                info!("✅ Audience analysis complete ({} segments)", profile.suggested_audiences.len());
                Generated::ai(AudienceAnalysis::from(profile), gateway.name(), gateway.default_model())
            }
            Err(e) => fallback(catalog::mock_audience(&product.name), "audience analysis", e).map(AudienceAnalysis::from),
        }
    }

    /// URL analysis followed by audience analysis of whatever product it yields.
    /// Degraded if either step was.
    pub async fn analyze_audience_by_url(&self, url: &str) -> Generated<AudienceAnalysis> {
        let product = self.analyze_product_from_url(url).await;
        let audience = self.analyze_audience(&product.data).await;
        if product.is_degraded() && !audience.is_degraded() {
            return Generated { data: audience.data, source: product.source };
        }
        audience
    }

    pub fn generate_video_script(&self, product: &ProductInfo, style: VideoStyle, duration: Option<u32>) -> VideoScript {
        let template = catalog::mock_script(style);
        VideoScript {
            id: Uuid::new_v4(),
            product_id: product.id.clone(),
            style,
            duration: duration.unwrap_or(DEFAULT_SCRIPT_DURATION),
            script: template.script,
            scenes: template.scenes,
            transitions: template.transitions,
            camera_angles: template.camera_angles,
            music_style: template.music_style,
            cta: template.cta,
            created_at: Utc::now(),
        }
    }

    /// At most [`MAX_AD_COUNT`] creatives; larger requests are clamped.
    pub fn generate_fb_ads(&self, product: &ProductInfo, count: Option<usize>) -> Vec<FbAdCreative> {
        let requested = count.unwrap_or(DEFAULT_AD_COUNT);
        if requested > MAX_AD_COUNT {
            warn!("⚠️ {} ads requested, generating {}", requested, MAX_AD_COUNT);
        }
        (0..requested.min(MAX_AD_COUNT))
            .map(|index| {
                let text = catalog::ad_template(product, index);
                FbAdCreative {
                    id: Uuid::new_v4(),
                    product_id: product.id.clone(),
                    headline: text.headline,
                    primary_text: text.primary_text,
                    description: text.description,
                    image: product.first_image(),
                    call_to_action: text.call_to_action,
                    created_at: Utc::now(),
                }
            })
            .collect()
    }
}

/// Facebook placement limits, counted in characters.
pub fn validate_ad_format(ad: &FbAdCreative) -> AdValidation {
    let mut errors = Vec::new();
    if ad.headline.chars().count() > 40 {
        errors.push("Headline must not exceed 40 characters".to_string());
    }
    if ad.primary_text.chars().count() > 125 {
        errors.push("Primary text should stay within 125 characters to display in full".to_string());
    }
    if ad.description.chars().count() > 30 {
        errors.push("Description must not exceed 30 characters".to_string());
    }
    AdValidation { valid: errors.is_empty(), errors }
}

async fn complete_as<T: DeserializeOwned>(gateway: &dyn ProviderGateway, prompt: String, system: &str) -> Result<T> {
    let request = CompletionRequest::new(prompt, system, gateway.default_model());
    let text = gateway.complete(&request).await?;
    Ok(extract::parse_as(&text)?)
}

fn fallback<T>(data: T, operation: &str, error: Error) -> Generated<T> {
    warn!("⚠️ {} failed at {} stage, using mock data: {}", operation, error.stage(), error);
    Generated::mock(data, MockReason::Failure { stage: error.stage().to_string(), message: error.to_string() })
}
