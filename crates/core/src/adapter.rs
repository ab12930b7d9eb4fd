//! The `search_hdworld` search plugin.
//!
//! One call to [`SiteSearchAdapter::search`] shapes the query, fetches the
//! site's results page once and turns every article that offers the configured
//! hoster into a [`ResultRecord`]. A failed request is logged and yields no
//! results instead of an error.

use std::sync::Arc;
use std::time::Instant;

use reqwest::Client;
use tracing::{debug, error};

use crate::error::Result;
use crate::fetcher::{build_http_client, fetch_page};
use crate::models::{QueryInput, ResultRecord, SearchConfig};
use crate::monitoring::get_metrics;
use crate::parser::extract_records;
use crate::query::{build_search_string, build_search_url};
use crate::title::{MovieTitleParser, TitleParser};

pub const PLUGIN_NAME: &str = "search_hdworld";
pub const BASE_URL: &str = "https://hd-world.cc/";

pub struct SiteSearchAdapter {
    client: Client,
    base_url: String,
    title_parser: Arc<dyn TitleParser>,
}

impl Default for SiteSearchAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteSearchAdapter {
    pub fn new() -> Self {
        Self {
            client: build_http_client(),
            base_url: BASE_URL.to_string(),
            title_parser: Arc::new(MovieTitleParser::new()),
        }
    }

    /// Point the adapter at a mirror or a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_title_parser(mut self, parser: Arc<dyn TitleParser>) -> Self {
        self.title_parser = parser;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The exact URL [`Self::search`] requests for this query.
    pub fn search_url(&self, query: &QueryInput, config: &SearchConfig) -> String {
        build_search_url(&self.base_url, &build_search_string(query, &config.search))
    }

    /// Search the site; request failures are logged and give an empty list.
    pub async fn search(&self, query: &QueryInput, config: &SearchConfig) -> Vec<ResultRecord> {
        match self.try_search(query, config).await {
            Ok(records) => records,
            Err(e) => {
                error!("Search request failed: {}", e);
                get_metrics().record_failure();
                Vec::new()
            }
        }
    }

    /// Like [`Self::search`] but hands the request error back to the caller.
    pub async fn try_search(
        &self,
        query: &QueryInput,
        config: &SearchConfig,
    ) -> Result<Vec<ResultRecord>> {
        let start = Instant::now();
        let url = self.search_url(query, config);
        debug!("Requesting: {}", url);

        let html = fetch_page(&self.client, &url).await?;
        let records = extract_records(&html, &config.hoster, self.title_parser.as_ref());

        debug!("{} releases found.", records.len());
        get_metrics().record_search(records.len(), start.elapsed());
        Ok(records)
    }
}
