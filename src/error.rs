use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed feed: {0}")]
    MalformedFeed(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0:#}")]
    Config(anyhow::Error),
}

impl FeedError {
    /// Process exit code for this failure. Usage errors follow the common
    /// `2` convention; everything else is `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            FeedError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        // Drop the url from the message, it is already in the log line.
        FeedError::Network(err.without_url().to_string())
    }
}

impl From<roxmltree::Error> for FeedError {
    fn from(err: roxmltree::Error) -> Self {
        FeedError::MalformedFeed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
