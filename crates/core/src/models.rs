use serde::{Deserialize, Serialize};

/// Per-invocation adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Hoster name as it appears as link text in an article, e.g. `DDownload.com`.
    pub hoster: String,
    #[serde(default)]
    pub search: SearchOptions,
}

/// Optional query shaping switches.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchOptions {
    #[serde(default, alias = "appendYear")]
    pub append_year: bool,
    #[serde(default, alias = "whitespaceToDot")]
    pub whitespace2dot: bool,
}

impl SearchConfig {
    pub fn new(hoster: impl Into<String>) -> Self {
        Self {
            hoster: hoster.into(),
            search: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInput {
    pub title: String,
    pub year: Option<i32>,
}

impl QueryInput {
    pub fn new(title: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

/// Name/year/quality split of a release title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTitle {
    pub name: String,
    pub year: Option<i32>,
    pub quality: Option<String>,
}

/// One release found on the results page.
///
/// Serializes as the host's generic entry: the download link goes out as `url`
/// and `imdb_url` is omitted when unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRecord {
    pub title: String,
    #[serde(rename = "url")]
    pub download_url: String,
    pub name: String,
    pub year: Option<i32>,
    pub quality: Option<String>,
    pub origin_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn record_serializes_as_entry() {
        let rec = ResultRecord {
            title: "Some.Movie.2022.1080p".to_string(),
            download_url: "https://dl.example/file".to_string(),
            name: "Some Movie".to_string(),
            year: Some(2022),
            quality: Some("1080p".to_string()),
            origin_url: "https://hd-world.cc/some-movie".to_string(),
            imdb_url: None,
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            v,
            json!({
                "title": "Some.Movie.2022.1080p",
                "url": "https://dl.example/file",
                "name": "Some Movie",
                "year": 2022,
                "quality": "1080p",
                "origin_url": "https://hd-world.cc/some-movie",
            })
        );
    }

    #[test]
    fn record_keeps_imdb_url_when_present() {
        let rec = ResultRecord {
            title: "t".to_string(),
            download_url: "u".to_string(),
            name: "n".to_string(),
            year: None,
            quality: None,
            origin_url: "o".to_string(),
            imdb_url: Some("https://www.imdb.com/title/tt1".to_string()),
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["imdb_url"], "https://www.imdb.com/title/tt1");
        assert!(v["year"].is_null());
    }

    #[test]
    fn options_default_to_false() {
        let cfg: SearchConfig = serde_json::from_value(json!({"hoster": "DDownload.com"})).unwrap();
        assert_eq!(cfg.search, SearchOptions::default());
        assert!(!cfg.search.append_year);
        assert!(!cfg.search.whitespace2dot);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let top = serde_json::from_value::<SearchConfig>(json!({
            "hoster": "DDownload.com",
            "limit": 3,
        }));
        assert!(top.is_err());
        let nested = serde_json::from_value::<SearchConfig>(json!({
            "hoster": "DDownload.com",
            "search": {"append_year": true, "fuzzy": true},
        }));
        assert!(nested.is_err());
    }

    #[test]
    fn camel_case_aliases_are_accepted() {
        let cfg: SearchConfig = serde_json::from_value(json!({
            "hoster": "Rapidgator.net",
            "search": {"appendYear": true, "whitespaceToDot": true},
        }))
        .unwrap();
        assert!(cfg.search.append_year);
        assert!(cfg.search.whitespace2dot);
    }

    #[test]
    fn missing_hoster_is_rejected() {
        assert!(serde_json::from_value::<SearchConfig>(json!({"search": {}})).is_err());
    }
}
