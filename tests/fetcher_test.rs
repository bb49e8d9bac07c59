mod common;

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use marketing_console::{
    error::FetchError,
    fetcher::{sanitize_html, ContentFetcher, MAX_CONTENT_CHARS},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

use common::{dead_base_url, product_page, spawn};

fn relay_app() -> Router {
    Router::new()
        .route("/down", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/blocked", get(|| async { StatusCode::FORBIDDEN }))
        .route("/short", get(|| async { "<html><body><p>Access denied</p></body></html>" }))
        .route("/html", get(|| async { axum::response::Html(product_page("Steel Bottle")) }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                axum::response::Html(product_page("Slow Bottle"))
            }),
        )
        .route("/json", get(|| async { Json(json!({ "contents": product_page("Json Bottle") })) }))
        .route("/long", get(|| async { axum::response::Html(format!("<p>{}</p>", "word ".repeat(2000))) }))
        .route(
            "/echo",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let target = params.get("u").cloned().unwrap_or_default();
                axum::response::Html(format!("<p>Fetched {} {}</p>", target, "padding ".repeat(20)))
            }),
        )
}

fn fetcher(base: &str, paths: &[&str]) -> ContentFetcher {
    let relays = paths.iter().map(|p| format!("{base}{p}?u={{url}}")).collect();
    ContentFetcher::new(relays, Duration::from_secs(5))
}

#[tokio::test]
async fn skips_failing_relays_and_uses_first_good_one() {
    let base = spawn(relay_app()).await;
    let fetcher = fetcher(&base, &["/down", "/blocked", "/html", "/json"]);

    let text = fetcher.fetch("https://shop.test/bottle").await.unwrap();

    assert_eq!(text, sanitize_html(&product_page("Steel Bottle")));
    assert!(text.starts_with("Steel Bottle Steel Bottle Premium"));
    assert!(!text.contains("track()"));
}

#[tokio::test]
async fn json_relay_bodies_are_unwrapped() {
    let base = spawn(relay_app()).await;
    let text = fetcher(&base, &["/json"]).fetch("https://shop.test/bottle").await.unwrap();
    assert!(text.starts_with("Json Bottle"));
}

#[tokio::test]
async fn short_content_moves_on_to_next_relay() {
    let base = spawn(relay_app()).await;
    let text = fetcher(&base, &["/short", "/html"]).fetch("https://shop.test/bottle").await.unwrap();
    assert!(text.contains("stainless steel bottle"));
}

#[tokio::test]
async fn only_short_content_exhausts_relays() {
    let base = spawn(relay_app()).await;
    let err = fetcher(&base, &["/short", "/down", "/short"]).fetch("https://shop.test/bottle").await.unwrap_err();
    assert!(matches!(err, FetchError::Exhausted { attempts: 3 }));
}

#[tokio::test]
async fn unreachable_relays_are_a_network_failure() {
    let dead = dead_base_url();
    let err = fetcher(&dead, &["/a", "/b"]).fetch("https://shop.test/bottle").await.unwrap_err();
    assert!(matches!(err, FetchError::Network { attempts: 2, .. }));
}

#[tokio::test]
async fn accepted_text_is_truncated() {
    let base = spawn(relay_app()).await;
    let text = fetcher(&base, &["/long"]).fetch("https://shop.test/long").await.unwrap();
    assert_eq!(text.chars().count(), MAX_CONTENT_CHARS);
}

#[tokio::test]
async fn target_url_reaches_relay_intact() {
    let base = spawn(relay_app()).await;
    let text = fetcher(&base, &["/echo"]).fetch("https://shop.test/item?id=7&ref=ad").await.unwrap();
    assert!(text.starts_with("Fetched https://shop.test/item?id=7&ref=ad padding"));
}

#[tokio::test]
async fn stalled_relay_is_abandoned_after_timeout() {
    let base = spawn(relay_app()).await;
    let relays = ["/slow", "/html"].iter().map(|p| format!("{base}{p}?u={{url}}")).collect();
    let fetcher = ContentFetcher::new(relays, Duration::from_secs(1));

    let started = std::time::Instant::now();
    let text = fetcher.fetch("https://shop.test/bottle").await.unwrap();

    assert!(text.starts_with("Steel Bottle"));
    assert!(started.elapsed() < Duration::from_secs(3));
}
