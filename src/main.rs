//! DSCN News Daemon
//!
//! Runs the one bot surface that needs no gateway connection: the periodic
//! technology-headline post to a Discord webhook.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dscn_bot::config::Config;
use dscn_bot::services::NewsService;
use dscn_bot::tasks::spawn_news_task;

/// Main entry point for the news daemon.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load `.env` and configuration from environment variables
/// 3. Construct the news service (it owns the headline cache)
/// 4. Start the periodic posting task
/// 5. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dscn_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting DSCN news daemon");

    dotenvy::dotenv().ok();
    let config = Config::from_env();
    info!(
        interval_secs = config.news_interval_secs,
        cache_ttl_secs = config.news_cache_ttl_secs,
        "configuration loaded"
    );

    let api_key = config
        .news_api_key
        .clone()
        .context("NEWS_API_KEY is not set")?;
    let webhook_url = config
        .news_webhook_url
        .clone()
        .context("NEWS_WEBHOOK_URL is not set")?;

    let service = Arc::new(NewsService::new(
        api_key,
        Duration::from_secs(config.news_cache_ttl_secs),
    ));

    let news_handle = spawn_news_task(service, webhook_url, config.news_interval_secs);
    info!("news posting task started");

    shutdown_signal(news_handle).await;
    info!("shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the news task.
async fn shutdown_signal(news_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("received SIGTERM, shutting down");
        }
    }

    news_handle.abort();
    warn!("news task aborted");
}
