use crate::config::FetchConfig;
use crate::error::{FeedError, Result};
use futures_util::StreamExt;
use reqwest::Client;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use url::Url;

/// Where a feed document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    /// An existing file path is read from disk; anything else must parse
    /// as an absolute URL.
    pub fn parse(raw: &str) -> Result<Source> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FeedError::InvalidArgument("feed URL is empty".into()));
        }
        if Path::new(raw).is_file() {
            return Ok(Source::Local(PathBuf::from(raw)));
        }
        Url::parse(raw)
            .map(Source::Remote)
            .map_err(|e| FeedError::InvalidArgument(format!("invalid feed URL `{raw}`: {e}")))
    }
}

pub fn build_client(cfg: &FetchConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(cfg.user_agent.clone()).gzip(true);
    if let Some(t) = cfg.connect_timeout() {
        builder = builder.connect_timeout(t);
    }
    if let Some(t) = cfg.timeout() {
        builder = builder.timeout(t);
    }
    Ok(builder.build()?)
}

/// GET `url` once and return the body as text.
///
/// Connection failures, timeouts, non-success statuses and bodies larger
/// than `max_body_bytes` are all [`FeedError::Network`].
pub async fn fetch(client: &Client, url: &Url, max_body_bytes: usize) -> Result<String> {
    info!(%url, "fetching feed");
    let resp = client.get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FeedError::Network(format!("server responded with {status}")));
    }

    // Stream with a max size limit
    let mut stream = resp.bytes_stream();
    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > max_body_bytes {
            return Err(FeedError::Network(format!(
                "response body exceeds {max_body_bytes} bytes"
            )));
        }
        buf.extend_from_slice(&chunk);
    }
    debug!(bytes = buf.len(), %status, "fetched feed");

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read a feed from wherever `source` points.
pub async fn fetch_source(cfg: &FetchConfig, source: &Source) -> Result<String> {
    match source {
        Source::Remote(url) => {
            let client = build_client(cfg)?;
            fetch(&client, url, cfg.max_body_bytes).await
        }
        Source::Local(path) => {
            info!(path = %path.display(), "reading local feed");
            let bytes = fs::read(path).map_err(|source| FeedError::Io {
                path: path.clone(),
                source,
            })?;
            if bytes.len() > cfg.max_body_bytes {
                return Err(FeedError::Io {
                    path: path.clone(),
                    source: io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("feed file exceeds {} bytes", cfg.max_body_bytes),
                    ),
                });
            }
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
