use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

use marketing_console::{config::Settings, router, AppState, TaskOrchestrator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = Settings::from_env();
    let status = settings.status();
    tracing::info!("📌 OPENROUTER_API_KEY: {}", status.openrouter_key.as_deref().unwrap_or("not set"));
    tracing::info!("📌 OPENAI_API_KEY: {}", status.openai_key.as_deref().unwrap_or("not set"));
    tracing::info!("📌 AI_MODEL: {}", status.model_override.as_deref().unwrap_or("not set (provider default)"));

    let provider = settings.select_provider();
    match &provider {
        Some(p) => tracing::info!("🤖 Using {} with model {}", p.display_name, p.default_model_id),
        None => tracing::warn!("⚠️ No API key configured, every operation will return mock data"),
    }

    let state = AppState {
        orchestrator: Arc::new(TaskOrchestrator::new(provider, &settings)),
        status: Arc::new(status),
    };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
