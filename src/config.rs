//! Process configuration read once from the environment.

use serde::Serialize;
use std::env;
use std::time::Duration;

pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENROUTER_DEFAULT_MODEL: &str = "google/gemini-flash-1.5";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4";
pub const ATTRIBUTION_TITLE: &str = "E-commerce Marketing AI";

/// Relay templates tried in order; `{url}` is replaced by the encoded target.
pub const DEFAULT_RELAYS: [&str; 3] = [
    "https://api.codetabs.com/v1/proxy?quest={url}",
    "https://corsproxy.io/?{url}",
    "https://api.allorigins.win/get?url={url}",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenRouter,
    OpenAi,
}

/// Optional request-attribution headers some backends ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub referer: String,
    pub title: String,
}

/// Everything needed to talk to one chat-completion backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub endpoint_url: String,
    pub default_model_id: String,
    pub display_name: String,
    pub attribution: Option<Attribution>,
}

impl ProviderConfig {
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self {
            kind: ProviderKind::OpenRouter,
            api_key: api_key.into(),
            endpoint_url: OPENROUTER_API_URL.to_string(),
            default_model_id: OPENROUTER_DEFAULT_MODEL.to_string(),
            display_name: "OpenRouter".to_string(),
            attribution: Some(Attribution {
                referer: "http://localhost:8080".to_string(),
                title: ATTRIBUTION_TITLE.to_string(),
            }),
        }
    }

    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            kind: ProviderKind::OpenAi,
            api_key: api_key.into(),
            endpoint_url: OPENAI_API_URL.to_string(),
            default_model_id: OPENAI_DEFAULT_MODEL.to_string(),
            display_name: "OpenAI".to_string(),
            attribution: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.default_model_id = model_id.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub openrouter_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub model_override: Option<String>,
    pub openrouter_api_url: String,
    pub openai_api_url: String,
    pub app_origin: String,
    pub relays: Vec<String>,
    pub request_timeout: Duration,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            openai_api_key: None,
            model_override: None,
            openrouter_api_url: OPENROUTER_API_URL.to_string(),
            openai_api_url: OPENAI_API_URL.to_string(),
            app_origin: "http://localhost:8080".to_string(),
            relays: DEFAULT_RELAYS.iter().map(|r| r.to_string()).collect(),
            request_timeout: Duration::from_secs(30),
            port: 8080,
        }
    }
}

impl Settings {
    /// Read settings from the process environment. Blank values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let relays = get("RELAY_ENDPOINTS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|r| !r.is_empty())
            .unwrap_or(defaults.relays);

        Self {
            openrouter_api_key: get("OPENROUTER_API_KEY"),
            openai_api_key: get("OPENAI_API_KEY"),
            model_override: get("AI_MODEL"),
            openrouter_api_url: get("OPENROUTER_API_URL").unwrap_or(defaults.openrouter_api_url),
            openai_api_url: get("OPENAI_API_URL").unwrap_or(defaults.openai_api_url),
            app_origin: get("APP_ORIGIN").unwrap_or(defaults.app_origin),
            relays,
            request_timeout: get("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            port: get("PORT").and_then(|v| v.parse().ok()).unwrap_or(defaults.port),
        }
    }

    /// First configured credential wins: OpenRouter, then OpenAI, else none.
    /// The model override applies to whichever provider is chosen.
    pub fn select_provider(&self) -> Option<ProviderConfig> {
        let selected = if let Some(key) = &self.openrouter_api_key {
            let mut config = ProviderConfig::openrouter(key.clone()).with_endpoint(&self.openrouter_api_url);
            if let Some(attribution) = config.attribution.as_mut() {
                attribution.referer = self.app_origin.clone();
            }
            config
        } else if let Some(key) = &self.openai_api_key {
            ProviderConfig::openai(key.clone()).with_endpoint(&self.openai_api_url)
        } else {
            return None;
        };

        Some(match &self.model_override {
            Some(model) => selected.with_model(model.clone()),
            None => selected,
        })
    }

    pub fn status(&self) -> ProviderStatus {
        let active = self.select_provider();
        ProviderStatus {
            openrouter_key: self.openrouter_api_key.as_deref().map(mask_secret),
            openai_key: self.openai_api_key.as_deref().map(mask_secret),
            model_override: self.model_override.clone(),
            active_provider: active.as_ref().map(|p| p.display_name.clone()),
            active_model: active.map(|p| p.default_model_id),
        }
    }
}

/// Credential diagnostics exposed by `GET /api/status`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProviderStatus {
    pub openrouter_key: Option<String>,
    pub openai_key: Option<String>,
    pub model_override: Option<String>,
    pub active_provider: Option<String>,
    pub active_model: Option<String>,
}

pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(10).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn no_credentials_selects_nothing() {
        assert_eq!(settings(&[]).select_provider(), None);
        assert_eq!(settings(&[("OPENAI_API_KEY", "   ")]).select_provider(), None);
    }

    #[test]
    fn openrouter_wins_over_openai() {
        let provider = settings(&[("OPENROUTER_API_KEY", "or-key"), ("OPENAI_API_KEY", "oa-key")])
            .select_provider()
            .unwrap();
        assert_eq!(provider.kind, ProviderKind::OpenRouter);
        assert_eq!(provider.api_key, "or-key");
        assert_eq!(provider.default_model_id, OPENROUTER_DEFAULT_MODEL);
        assert_eq!(provider.attribution.map(|a| a.referer), Some("http://localhost:8080".to_string()));

        let provider = settings(&[("OPENROUTER_API_KEY", "or-key"), ("APP_ORIGIN", "https://console.shop.test")])
            .select_provider()
            .unwrap();
        let attribution = provider.attribution.unwrap();
        assert_eq!(attribution.referer, "https://console.shop.test");
        assert_eq!(attribution.title, ATTRIBUTION_TITLE);
    }

    #[test]
    fn zero_or_invalid_timeout_keeps_default() {
        let default = Settings::default().request_timeout;
        assert_eq!(settings(&[("REQUEST_TIMEOUT_SECS", "0")]).request_timeout, default);
        assert_eq!(settings(&[("REQUEST_TIMEOUT_SECS", "soon")]).request_timeout, default);
        assert_eq!(settings(&[("REQUEST_TIMEOUT_SECS", "5")]).request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn openai_used_when_only_second_key_present() {
        let provider = settings(&[("OPENAI_API_KEY", "oa-key")]).select_provider().unwrap();
        assert_eq!(provider.kind, ProviderKind::OpenAi);
        assert_eq!(provider.default_model_id, OPENAI_DEFAULT_MODEL);
        assert_eq!(provider.attribution, None);
    }

    #[test]
    fn model_override_applies_to_active_provider() {
        let provider = settings(&[("OPENAI_API_KEY", "oa-key"), ("AI_MODEL", "gpt-4o-mini")])
            .select_provider()
            .unwrap();
        assert_eq!(provider.default_model_id, "gpt-4o-mini");
    }

    #[test]
    fn relay_list_and_timeout_parse() {
        let s = settings(&[
            ("RELAY_ENDPOINTS", "http://a/?u={url}, ,http://b/{url}"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]);
        assert_eq!(s.relays, vec!["http://a/?u={url}".to_string(), "http://b/{url}".to_string()]);
        assert_eq!(s.request_timeout, Duration::from_secs(5));
        assert_eq!(settings(&[]).relays.len(), DEFAULT_RELAYS.len());
    }

    #[test]
    fn status_masks_keys() {
        let status = settings(&[("OPENROUTER_API_KEY", "sk-or-v1-abcdefghijkl")]).status();
        assert_eq!(status.openrouter_key.as_deref(), Some("sk-or-v1-a..."));
        assert_eq!(status.active_provider.as_deref(), Some("OpenRouter"));
        assert_eq!(status.openai_key, None);
    }
}
