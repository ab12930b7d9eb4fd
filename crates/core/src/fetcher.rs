use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, SearchError};

pub fn build_http_client() -> Client {
    Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36 hdworld-search/0.1")
        .gzip(true)
        .brotli(true)
        .pool_idle_timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(2)
        .timeout(Duration::from_secs(15))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Issue exactly one GET and return the body. Retries are left to the caller.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|source| SearchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(SearchError::Status {
            url: url.to_string(),
            status,
        });
    }

    resp.text().await.map_err(|source| SearchError::Body {
        url: url.to_string(),
        source,
    })
}
