use thiserror::Error;

/// Errors surfaced by the search adapter and its configuration loader.
///
/// The transport variants never escape [`crate::adapter::SiteSearchAdapter::search`];
/// they are logged there and the search degrades to an empty result.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl SearchError {
    /// True for failures of the single network request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SearchError::Transport { .. } | SearchError::Status { .. } | SearchError::Body { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
