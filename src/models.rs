use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProductAttributes {
    pub color: Option<Vec<String>>,
    pub size: Option<Vec<String>>,
    pub material: Option<String>,
    pub usage: Option<Vec<String>>,
}

/// Product details, filled in by the user and by URL analysis.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProductInfo {
    pub id: Option<String>,
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
    pub attributes: Option<ProductAttributes>,
}

impl ProductInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Overlay every field `other` actually carries onto `self`.
    pub fn merge(&mut self, other: ProductInfo) {
        if !other.name.trim().is_empty() { self.name = other.name; }
        if other.id.is_some() { self.id = other.id; }
        if other.url.is_some() { self.url = other.url; }
        if other.description.is_some() { self.description = other.description; }
        if other.category.is_some() { self.category = other.category; }
        if let Some(price) = other.price.filter(|p| p.is_finite() && *p >= 0.0) { self.price = Some(price); }
        if other.images.is_some() { self.images = other.images; }
        if other.attributes.is_some() { self.attributes = other.attributes; }
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn first_image(&self) -> Option<String> {
        self.images.as_ref().and_then(|i| i.first().cloned())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CopyType {
    Seo,
    Ecommerce,
    Emotional,
    ShortTitle,
    ShopeeSpec,
}

impl CopyType {
    pub const ALL: [CopyType; 5] = [
        CopyType::Seo,
        CopyType::Ecommerce,
        CopyType::Emotional,
        CopyType::ShortTitle,
        CopyType::ShopeeSpec,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CopyType::Seo => "seo",
            CopyType::Ecommerce => "ecommerce",
            CopyType::Emotional => "emotional",
            CopyType::ShortTitle => "short_title",
            CopyType::ShopeeSpec => "shopee_spec",
        }
    }
}

/// Title/content/keywords as produced by a model or the mock catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CopyText {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneratedCopy {
    pub id: Uuid,
    pub product_id: Option<String>,
    pub copy_type: CopyType,
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl GeneratedCopy {
    pub fn new(product: &ProductInfo, copy_type: CopyType, text: CopyText) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product.id.clone(),
            copy_type,
            title: text.title,
            content: text.content,
            keywords: text.keywords,
            created_at: Utc::now(),
        }
    }
}

/// Read case-insensitively; model output capitalizes platform names freely.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    Shopee,
    Momo,
    Pchome,
    Facebook,
    Instagram,
}

impl TryFrom<String> for Platform {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "shopee" => Ok(Platform::Shopee),
            "momo" => Ok(Platform::Momo),
            "pchome" => Ok(Platform::Pchome),
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            _ => Err(format!("unknown platform `{value}`")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AudienceSize {
    Small,
    Medium,
    Large,
}

impl TryFrom<String> for AudienceSize {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "small" => Ok(AudienceSize::Small),
            "medium" => Ok(AudienceSize::Medium),
            "large" => Ok(AudienceSize::Large),
            _ => Err(format!("unknown audience size `{value}`")),
        }
    }
}

pub const MAX_RELEVANCE_SCORE: u8 = 100;

/// Accepts any number, or a numeric string, rounded and clamped to `0..=100`.
fn relevance_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
    }

    let score = match RawScore::deserialize(deserializer)? {
        RawScore::Number(n) => n,
        RawScore::Text(text) => text
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid relevance score `{text}`")))?,
    };
    if !score.is_finite() {
        return Err(serde::de::Error::custom("relevance score is not a finite number"));
    }
    Ok(score.round().clamp(0.0, f64::from(MAX_RELEVANCE_SCORE)) as u8)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AudienceSegment {
    pub name: String,
    pub description: String,
    pub size: AudienceSize,
    #[serde(deserialize_with = "relevance_score")]
    pub relevance_score: u8,
    pub suggested_platforms: Vec<Platform>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Demographics {
    pub age_range: Vec<String>,
    pub gender: Vec<String>,
    pub interests: Vec<String>,
    pub behaviors: Vec<String>,
}

/// The analysis body, shared by model output and the mock catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AudienceProfile {
    pub product_name: String,
    pub suggested_audiences: Vec<AudienceSegment>,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub target_markets: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AudienceAnalysis {
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: AudienceProfile,
    pub created_at: DateTime<Utc>,
}

impl From<AudienceProfile> for AudienceAnalysis {
    fn from(profile: AudienceProfile) -> Self {
        Self { id: Uuid::new_v4(), profile, created_at: Utc::now() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VideoStyle {
    SalesTalk,
    ProductDisplay,
    StoryTelling,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SceneScript {
    pub scene_number: u32,
    pub duration: u32,
    pub description: String,
    pub voiceover: String,
    pub camera_angle: String,
    #[serde(default)]
    pub props: Vec<String>,
}

/// Script body without identity, as kept in the mock catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptTemplate {
    pub script: String,
    pub scenes: Vec<SceneScript>,
    pub transitions: Vec<String>,
    pub camera_angles: Vec<String>,
    pub music_style: String,
    pub cta: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoScript {
    pub id: Uuid,
    pub product_id: Option<String>,
    pub style: VideoStyle,
    pub duration: u32,
    pub script: String,
    pub scenes: Vec<SceneScript>,
    pub transitions: Vec<String>,
    pub camera_angles: Vec<String>,
    pub music_style: String,
    pub cta: String,
    pub created_at: DateTime<Utc>,
}

/// Ad wording without identity, as kept in the mock catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AdText {
    pub headline: String,
    pub primary_text: String,
    pub description: String,
    pub call_to_action: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FbAdCreative {
    pub id: Uuid,
    pub product_id: Option<String>,
    pub headline: String,
    pub primary_text: String,
    pub description: String,
    pub image: Option<String>,
    pub call_to_action: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlatformContent {
    pub platform: Platform,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub specifications: Vec<String>,
    #[serde(default)]
    pub selling_points: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub csv_data: Option<String>,
}

// --- Result envelope ---

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MockReason {
    NoCredentials,
    Failure { stage: String, message: String },
}

/// Which path produced a result.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    Ai { provider: String, model: String },
    Mock { reason: MockReason },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Generated<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Generated<T> {
    pub fn ai(data: T, provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self { data, source: Source::Ai { provider: provider.into(), model: model.into() } }
    }

    pub fn mock(data: T, reason: MockReason) -> Self {
        Self { data, source: Source::Mock { reason } }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.source, Source::Mock { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Generated<U> {
        Generated { data: f(self.data), source: self.source }
    }
}

// --- Request bodies ---

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyzeUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CopyRequest {
    pub product: ProductInfo,
    pub copy_type: CopyType,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchCopyRequest {
    pub product: ProductInfo,
    pub copy_types: Vec<CopyType>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportCopiesRequest {
    pub copies: Vec<GeneratedCopy>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AudienceRequest {
    pub product: ProductInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VideoScriptRequest {
    pub product: ProductInfo,
    pub style: VideoStyle,
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FbAdsRequest {
    pub product: ProductInfo,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ValidatedAd {
    pub ad: FbAdCreative,
    pub validation: AdValidation,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlatformRequest {
    pub product: ProductInfo,
    pub copy: GeneratedCopy,
    pub platform: Platform,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn audience_segment_reads_loose_model_output() {
        let segment: AudienceSegment = serde_json::from_str(
            r#"{"name":"Hikers","description":"Weekend trails","size":"Large","relevance_score":87.6,"suggested_platforms":["Instagram","PChome"," momo "]}"#,
        )
        .unwrap();
        assert_eq!(segment.size, AudienceSize::Large);
        assert_eq!(segment.relevance_score, 88);
        assert_eq!(segment.suggested_platforms, vec![Platform::Instagram, Platform::Pchome, Platform::Momo]);

        let clamped: AudienceSegment = serde_json::from_str(
            r#"{"name":"x","description":"y","size":"MEDIUM","relevance_score":"140","suggested_platforms":[]}"#,
        )
        .unwrap();
        assert_eq!(clamped.relevance_score, MAX_RELEVANCE_SCORE);
        assert_eq!(serde_json::to_value(clamped.size).unwrap(), "medium");
    }

    #[test]
    fn unknown_platform_is_still_rejected() {
        assert!(serde_json::from_str::<Platform>(r#""myspace""#).is_err());
    }

    #[test]
    fn merge_keeps_existing_fields_and_rejects_negative_price() {
        let mut product = ProductInfo { url: Some("https://shop.test/p/1".into()), ..ProductInfo::default() };
        product.merge(ProductInfo {
            name: "Travel Mug".into(),
            description: Some("Keeps coffee hot".into()),
            price: Some(-3.0),
            ..ProductInfo::default()
        });
        assert_eq!(product.name, "Travel Mug");
        assert_eq!(product.url.as_deref(), Some("https://shop.test/p/1"));
        assert_eq!(product.price, None);
    }

    #[test]
    fn source_serializes_with_kind_tag() {
        let generated = Generated::mock(1, MockReason::NoCredentials);
        let json = serde_json::to_value(&generated).unwrap();
        assert_eq!(json["source"]["kind"], "mock");
        assert_eq!(json["source"]["reason"]["kind"], "no_credentials");
        assert!(generated.is_degraded());
    }

    #[test]
    fn product_info_accepts_null_price() {
        let product: ProductInfo = serde_json::from_str(r#"{"name":"Lamp","price":null}"#).unwrap();
        assert_eq!(product.price, None);
        assert_eq!(product.name, "Lamp");
    }
}
