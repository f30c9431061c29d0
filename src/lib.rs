//! Fetch one RSS feed and print its items as text or JSON.
//!
//! The pipeline is [`feed::fetch_source`] → [`feed::parse`] → [`feed::format`],
//! wired together by [`feed::run`].

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod util;

pub use error::{FeedError, Result};
pub use feed::{Channel, FeedItem};
