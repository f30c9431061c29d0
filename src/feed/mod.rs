mod fetch;
mod model;
mod parse;
mod render;

use crate::cli::Options;
use crate::config::AppConfig;
use crate::error::Result;

pub use fetch::{Source, build_client, fetch, fetch_source};
pub use model::{Channel, FeedItem};
pub use parse::{parse, parse_channel};
pub use render::{format, format_channel, truncate};

/// Fetch, parse and render one feed. Nothing is returned for printing
/// unless every stage succeeds.
pub async fn run(opts: &Options, cfg: &AppConfig) -> Result<String> {
    let xml = fetch_source(&cfg.fetch, &opts.source).await?;
    if opts.channel {
        let channel = parse_channel(&xml)?;
        Ok(format_channel(&channel, opts.limit, opts.json))
    } else {
        let items = parse(&xml)?;
        Ok(format(&items, opts.limit, opts.json))
    }
}
