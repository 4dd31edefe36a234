//! Background Tasks Module
//!
//! Periodic work the bot runs while online. Note there is deliberately no
//! cache-sweeping task here: the expiring cache evicts lazily on access.

mod news_loop;

pub use news_loop::spawn_news_task;
