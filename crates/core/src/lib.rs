//! Search adapter for hd-world.cc release listings.
//!
//! [`adapter::SiteSearchAdapter`] is the entry point; the other modules are its
//! building blocks and are public so hosts can reuse them piecemeal.

pub mod adapter;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod monitoring;
pub mod output;
pub mod parser;
pub mod query;
pub mod title;

pub use adapter::{BASE_URL, PLUGIN_NAME, SiteSearchAdapter};
pub use error::SearchError;
pub use models::{ParsedTitle, QueryInput, ResultRecord, SearchConfig, SearchOptions};
pub use title::{MovieTitleParser, TitleParser};
