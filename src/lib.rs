//! DSCN Bot - data and caching layer for the label's community bot
//!
//! Provides the TTL-expiring lookup cache, the document-store seam, and the
//! services built on both (artist registry, tag store, news feed).

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod tasks;

pub use cache::ExpiringCache;
pub use config::Config;
pub use tasks::spawn_news_task;
