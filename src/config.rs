//! Configuration Module
//!
//! Handles loading bot configuration from environment variables. The binary
//! loads a `.env` file first; the library never touches the filesystem.

use std::env;

/// Bot configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults; the news credentials have no default and stay `None` when
/// unset.
#[derive(Debug, Clone)]
pub struct Config {
    /// News API key (`NEWS_API_KEY`)
    pub news_api_key: Option<String>,
    /// Discord webhook URL the news loop posts to (`NEWS_WEBHOOK_URL`)
    pub news_webhook_url: Option<String>,
    /// Seconds between news posts
    pub news_interval_secs: u64,
    /// TTL in seconds for cached artist lookups
    pub artist_cache_ttl_secs: u64,
    /// TTL in seconds for cached headline batches
    pub news_cache_ttl_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NEWS_API_KEY` - News API credential (no default)
    /// - `NEWS_WEBHOOK_URL` - Webhook target (no default)
    /// - `NEWS_INTERVAL_SECS` - Seconds between posts (default: 3600)
    /// - `ARTIST_CACHE_TTL_SECS` - Artist cache TTL (default: 60)
    /// - `NEWS_CACHE_TTL_SECS` - Headline cache TTL (default: 3600)
    pub fn from_env() -> Self {
        Self {
            news_api_key: env::var("NEWS_API_KEY").ok(),
            news_webhook_url: env::var("NEWS_WEBHOOK_URL").ok(),
            news_interval_secs: env::var("NEWS_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            artist_cache_ttl_secs: env::var("ARTIST_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            news_cache_ttl_secs: env::var("NEWS_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: None,
            news_webhook_url: None,
            news_interval_secs: 3600,
            artist_cache_ttl_secs: 60,
            news_cache_ttl_secs: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.news_api_key.is_none());
        assert!(config.news_webhook_url.is_none());
        assert_eq!(config.news_interval_secs, 3600);
        assert_eq!(config.artist_cache_ttl_secs, 60);
        assert_eq!(config.news_cache_ttl_secs, 3600);
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::remove_var("NEWS_INTERVAL_SECS");
        env::remove_var("ARTIST_CACHE_TTL_SECS");
        env::remove_var("NEWS_CACHE_TTL_SECS");

        let config = Config::from_env();
        assert_eq!(config.news_interval_secs, 3600);
        assert_eq!(config.artist_cache_ttl_secs, 60);
        assert_eq!(config.news_cache_ttl_secs, 3600);
    }
}
