//! Services Module
//!
//! The bot's data services: each owns its collection handle (and cache,
//! where one exists) explicitly; nothing here is process-global state.

pub mod artists;
pub mod news;
pub mod tags;

// Re-export public types
pub use artists::ArtistRegistry;
pub use news::{NewsService, COUNTRIES};
pub use tags::TagStore;
