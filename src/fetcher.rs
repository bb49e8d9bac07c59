//! Retrieves product page text through a chain of public relay services.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::FetchError;

pub const MIN_CONTENT_CHARS: usize = 100;
pub const MAX_CONTENT_CHARS: usize = 3000;

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());
static STYLE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

pub struct ContentFetcher {
    client: Client,
    relays: Vec<String>,
}

impl ContentFetcher {
    /// `relays` are URL templates with a `{url}` placeholder for the encoded target.
    pub fn new(relays: Vec<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("⚠️ Failed to build HTTP client with {:?} timeout, using defaults: {}", timeout, e);
                Client::new()
            });
        Self { client, relays }
    }

    pub fn relays(&self) -> &[String] {
        &self.relays
    }

    /// Sanitized page text, at most [`MAX_CONTENT_CHARS`] characters.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut responded = false;
        let mut last_error = String::from("no relays configured");

        for template in &self.relays {
            let relay_url = relay_url(template, url);
            let relay_name = template.split('?').next().unwrap_or(template);
            info!("🔄 Trying relay: {}", relay_name);

            let response = match self
                .client
                .get(&relay_url)
                .header(header::ACCEPT, "text/html,application/json")
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    warn!("⚠️ Relay unreachable ({}): {}", relay_name, e);
                    last_error = e.to_string();
                    continue;
                }
            };
            responded = true;

            let status = response.status();
            if !status.is_success() {
                warn!("⚠️ Relay failed ({}): {}", status, relay_name);
                continue;
            }

            let is_json = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|ct| ct.contains("application/json"))
                .unwrap_or(false);

            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("⚠️ Relay body unreadable ({}): {}", relay_name, e);
                    continue;
                }
            };

            let html = if is_json { unwrap_json_body(body) } else { body };
            let text = sanitize_html(&html);
            let length = text.chars().count();
            if length < MIN_CONTENT_CHARS {
                warn!("⚠️ Relay content too short ({} chars), trying next: {}", length, relay_name);
                continue;
            }

            let text = truncate_chars(&text, MAX_CONTENT_CHARS);
            info!("✅ Fetched {} chars via {}", text.chars().count(), relay_name);
            return Ok(text);
        }

        let attempts = self.relays.len();
        if responded {
            Err(FetchError::Exhausted { attempts })
        } else {
            Err(FetchError::Network { attempts, last_error })
        }
    }
}

pub fn relay_url(template: &str, target: &str) -> String {
    template.replace("{url}", &urlencoding::encode(target))
}

/// Relays answering in JSON wrap the page in `contents` or `content`.
fn unwrap_json_body(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => ["contents", "content"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
            .or_else(|| value.as_str().map(str::to_string))
            .unwrap_or(body),
        Err(_) => body,
    }
}

/// Drop scripts, styles and tags, then collapse whitespace.
pub fn sanitize_html(html: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(html, "");
    let text = STYLE_BLOCK.replace_all(&text, "");
    let text = TAG.replace_all(&text, " ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
