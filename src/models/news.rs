//! News API response shapes
//!
//! Deserialized from the NewsAPI top-headlines endpoint. Field casing
//! follows the upstream JSON; most article fields are nullable there.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level response from the top-headlines endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlinesResponse {
    /// "ok" or "error"
    pub status: String,
    /// The article batch, possibly empty
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

/// The outlet an article came from.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsSource {
    /// Publisher display name
    pub name: String,
}

/// A single headline article.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticle {
    /// Byline, often missing
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub source: NewsSource,
    pub content: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub url: String,
    /// Cover image URL
    #[serde(rename = "urlToImage")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": "ok",
        "totalResults": 1,
        "articles": [{
            "source": {"id": null, "name": "The Verge"},
            "author": "A. Writer",
            "title": "Chips get smaller",
            "description": "Again.",
            "url": "https://news.example/chips",
            "urlToImage": "https://news.example/chips.jpg",
            "publishedAt": "2021-08-01T12:30:00Z",
            "content": "Lorem ipsum"
        }]
    }"#;

    #[test]
    fn test_headlines_deserialize() {
        let response: HeadlinesResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(response.status, "ok");
        assert_eq!(response.articles.len(), 1);

        let article = &response.articles[0];
        assert_eq!(article.source.name, "The Verge");
        assert_eq!(article.published_at.to_rfc3339(), "2021-08-01T12:30:00+00:00");
        assert_eq!(article.image.as_deref(), Some("https://news.example/chips.jpg"));
    }

    #[test]
    fn test_article_nullable_fields() {
        let json = r#"{
            "source": {"name": "Wire"},
            "author": null,
            "title": "Untitled",
            "description": null,
            "url": "https://news.example/x",
            "urlToImage": null,
            "publishedAt": "2021-01-01T00:00:00Z",
            "content": null
        }"#;

        let article: NewsArticle = serde_json::from_str(json).unwrap();
        assert!(article.author.is_none());
        assert!(article.image.is_none());
    }

    #[test]
    fn test_empty_batch() {
        let json = r#"{"status": "ok"}"#;
        let response: HeadlinesResponse = serde_json::from_str(json).unwrap();
        assert!(response.articles.is_empty());
    }
}
