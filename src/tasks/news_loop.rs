//! News Posting Task
//!
//! Background task that periodically posts a technology headline to the
//! configured Discord webhook.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::services::NewsService;

/// Spawns the periodic headline poster.
///
/// The task sleeps for `interval_secs` between posts. Delivery failures are
/// logged and dropped; the loop always survives to the next tick. The
/// returned handle is used to abort the task during graceful shutdown.
///
/// # Arguments
/// * `service` - Shared news service (it owns the headline cache)
/// * `webhook_url` - Discord webhook to post to
/// * `interval_secs` - Seconds between posts
pub fn spawn_news_task(
    service: Arc<NewsService>,
    webhook_url: String,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(interval_secs, "starting news posting task");

        loop {
            tokio::time::sleep(interval).await;

            match service.post_headline(&webhook_url).await {
                Ok(()) => info!("news tick delivered"),
                Err(err) => warn!(%err, "news tick failed, will retry next interval"),
            }
        }
    })
}
