//! Shared helpers: local HTTP servers standing in for relays and backends.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use marketing_console::{
    provider::{CompletionRequest, ProviderGateway},
    Result,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// Serve `app` on an ephemeral port and return its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Page text long enough to pass the minimum-length check.
pub fn product_page(title: &str) -> String {
    format!(
        "<html><head><title>{title}</title><script>track()</script><style>p {{ margin: 0 }}</style></head>\
         <body><h1>{title}</h1><p>Premium stainless steel bottle that keeps drinks cold for 24 hours \
         and hot for 12 hours. Leak-proof lid, 500ml, available in black and silver.</p></body></html>"
    )
}

type Reply = Box<dyn Fn(&CompletionRequest) -> Result<String> + Send + Sync>;

/// In-memory gateway with a scripted reply and call recording.
pub struct FakeGateway {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeGateway {
    pub fn new(reply: impl Fn(&CompletionRequest) -> Result<String> + Send + Sync + 'static) -> Self {
        Self { reply: Box::new(reply), calls: AtomicUsize::new(0), requests: Mutex::new(Vec::new()) }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Ok(text.clone()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl ProviderGateway for FakeGateway {
    fn name(&self) -> &str {
        "Fake"
    }

    fn default_model(&self) -> &str {
        "fake-model-1"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().expect("requests lock").push(request.clone());
        (self.reply)(request)
    }
}
