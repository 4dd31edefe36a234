//! News Service
//!
//! Fetches technology headlines from the news API and posts one as an embed
//! to a Discord webhook. Fetched batches are cached per country so the
//! hourly loop (and ad-hoc commands) don't hammer the API; the cache is a
//! field of the service, constructed with it and torn down with it.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::ExpiringCache;
use crate::error::NewsError;
use crate::models::{
    Embed, EmbedAuthor, EmbedFooter, EmbedImage, HeadlinesResponse, NewsArticle, WebhookMessage,
};

/// Countries the bot samples headlines from.
pub const COUNTRIES: [&str; 3] = ["us", "gb", "in"];

/// How long a fetched headline batch stays hot.
pub const DEFAULT_NEWS_CACHE_TTL: Duration = Duration::from_secs(3600);

const TOP_HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";

// == News Service ==
/// Client for the technology top-headlines feed.
pub struct NewsService {
    client: reqwest::Client,
    api_key: String,
    /// Headline batches keyed by country code
    cache: RwLock<ExpiringCache<Vec<NewsArticle>>>,
}

impl NewsService {
    // == Constructor ==
    pub fn new(api_key: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            cache: RwLock::new(ExpiringCache::new(cache_ttl)),
        }
    }

    // == Headlines ==
    /// Returns the technology headlines for `country`, cached per country
    /// until the TTL lapses.
    pub async fn top_headlines(&self, country: &str) -> Result<Vec<NewsArticle>, NewsError> {
        if let Some(articles) = self.cache.write().await.get(country) {
            debug!(country, "headlines served from cache");
            return Ok(articles.clone());
        }

        let response: HeadlinesResponse = self
            .client
            .get(TOP_HEADLINES_URL)
            .query(&[
                ("country", country),
                ("category", "technology"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(country, count = response.articles.len(), "fetched headlines");
        let articles = response.articles;
        self.cache.write().await.insert(country, articles.clone());
        Ok(articles)
    }

    /// Picks one headline from a random country.
    ///
    /// An empty batch is retried once against a fresh fetch (the cached
    /// empty batch is dropped first); a second empty batch is an error.
    pub async fn random_headline(&self) -> Result<NewsArticle, NewsError> {
        let country = Self::random_country();

        let articles = self.top_headlines(country).await?;
        if let Some(article) = Self::pick(&articles) {
            return Ok(article);
        }

        warn!(country, "empty headline batch, refetching");
        let _ = self.cache.write().await.remove(country);
        let articles = self.top_headlines(country).await?;
        Self::pick(&articles).ok_or_else(|| NewsError::EmptyBatch(country.to_string()))
    }

    // == Webhook Delivery ==
    /// Posts one random headline to the webhook.
    ///
    /// A failed delivery is retried once with a freshly picked article;
    /// after that the error is the caller's to log and drop.
    pub async fn post_headline(&self, webhook_url: &str) -> Result<(), NewsError> {
        let article = self.random_headline().await?;
        match self.deliver(webhook_url, &article).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(%err, "webhook delivery failed, retrying with a fresh article");
                let article = self.random_headline().await?;
                self.deliver(webhook_url, &article).await
            }
        }
    }

    async fn deliver(&self, webhook_url: &str, article: &NewsArticle) -> Result<(), NewsError> {
        let message = WebhookMessage {
            content: None,
            embeds: vec![Self::build_embed(article)],
        };

        self.client
            .post(webhook_url)
            .json(&message)
            .send()
            .await?
            .error_for_status()?;

        info!(title = %article.title, "posted headline to webhook");
        Ok(())
    }

    // == Embed Assembly ==
    /// Renders an article as the webhook embed payload.
    pub fn build_embed(article: &NewsArticle) -> Embed {
        let author = article.author.as_deref().unwrap_or("Unknown");

        let mut description = article.description.clone().unwrap_or_default();
        if let Some(content) = &article.content {
            if !description.is_empty() {
                description.push('\n');
            }
            description.push_str(content);
        }

        Embed {
            title: Some(article.title.clone()),
            description: Some(description),
            url: Some(article.url.clone()),
            color: Some(rand::thread_rng().gen_range(0..=0xFF_FF_FF)),
            timestamp: Some(article.published_at.to_rfc3339()),
            footer: Some(EmbedFooter {
                text: format!("{} | Published At", article.source.name),
                icon_url: None,
            }),
            author: Some(EmbedAuthor {
                name: format!("Author: {author}"),
            }),
            image: article.image.clone().map(|url| EmbedImage { url }),
            ..Default::default()
        }
    }

    fn random_country() -> &'static str {
        COUNTRIES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("us")
    }

    fn pick(articles: &[NewsArticle]) -> Option<NewsArticle> {
        articles.choose(&mut rand::thread_rng()).cloned()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsSource;
    use chrono::Utc;

    fn article() -> NewsArticle {
        NewsArticle {
            author: Some("A. Writer".to_string()),
            title: "Chips get smaller".to_string(),
            description: Some("Again.".to_string()),
            source: NewsSource {
                name: "The Verge".to_string(),
            },
            content: Some("Lorem ipsum".to_string()),
            published_at: Utc::now(),
            url: "https://news.example/chips".to_string(),
            image: Some("https://news.example/chips.jpg".to_string()),
        }
    }

    #[test]
    fn test_build_embed_full_article() {
        let embed = NewsService::build_embed(&article());

        assert_eq!(embed.title.as_deref(), Some("Chips get smaller"));
        assert_eq!(embed.description.as_deref(), Some("Again.\nLorem ipsum"));
        assert_eq!(
            embed.footer.unwrap().text,
            "The Verge | Published At"
        );
        assert_eq!(embed.author.unwrap().name, "Author: A. Writer");
        assert!(embed.color.unwrap() <= 0xFF_FF_FF);
        assert!(embed.image.is_some());
    }

    #[test]
    fn test_build_embed_missing_author_and_image() {
        let mut bare = article();
        bare.author = None;
        bare.image = None;
        bare.description = None;
        bare.content = None;

        let embed = NewsService::build_embed(&bare);
        assert_eq!(embed.author.unwrap().name, "Author: Unknown");
        assert!(embed.image.is_none());
        assert_eq!(embed.description.as_deref(), Some(""));
    }

    #[test]
    fn test_random_country_is_known() {
        for _ in 0..20 {
            assert!(COUNTRIES.contains(&NewsService::random_country()));
        }
    }

    #[test]
    fn test_pick_empty_batch() {
        assert!(NewsService::pick(&[]).is_none());
    }

    #[tokio::test]
    async fn test_cached_batch_is_reused() {
        // Seed the cache directly; a live API is not required to observe
        // the cache path.
        let service = NewsService::new("test-key", DEFAULT_NEWS_CACHE_TTL);
        service
            .cache
            .write()
            .await
            .insert("us", vec![article()]);

        // Force the cached country.
        let articles = service.top_headlines("us").await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Chips get smaller");
    }
}
