use anyhow::{Context, Result};
use cfo_api::{create_router, ApiState};
use cfo_core::{AdvisoryGateway, AppConfig, GeminiClient, LedgerStore, SnapshotStore};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console output plus a JSON log file in the configured log directory
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .with_context(|| format!("Failed to open log file {}", config.log_path().display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cfo_api=info,cfo_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config
        .ensure_directories()
        .context("Failed to create data and log directories")?;
    init_tracing(&config)?;

    let snapshot = SnapshotStore::from_optional_file(config.snapshot_path.as_deref())?;
    let ledger = LedgerStore::load(config.usage_path()).await;

    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; the assistant will answer with fallback advice");
    }
    let advisor = AdvisoryGateway::new(Arc::new(GeminiClient::new(&config.gemini)));

    let app = create_router(ApiState::new(snapshot, ledger, advisor));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("CFO Helper Agent server running on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
