use crate::error::{Result, SearchError};
use crate::models::SearchConfig;
use std::path::{Path, PathBuf};

impl SearchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded search config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hoster.trim().is_empty() {
            return Err(SearchError::Config("hoster cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Get the default configuration file path
pub fn default_config_path() -> PathBuf {
    if let Ok(config_dir) = std::env::var("HDWORLD_SEARCH_CONFIG_DIR") {
        PathBuf::from(config_dir).join("hdworld.toml")
    } else {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hdworld-search")
            .join("hdworld.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchOptions;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("hdworld.toml");

        let config_content = r#"
hoster = "DDownload.com"

[search]
append_year = true
whitespace2dot = true
"#;

        std::fs::write(&config_path, config_content).unwrap();

        let cfg = SearchConfig::load_from_file(&config_path).unwrap();
        assert_eq!(cfg.hoster, "DDownload.com");
        assert_eq!(
            cfg.search,
            SearchOptions {
                append_year: true,
                whitespace2dot: true,
            }
        );
    }

    #[test]
    fn search_table_is_optional() {
        let cfg = SearchConfig::from_toml_str(r#"hoster = "Rapidgator.net""#).unwrap();
        assert_eq!(cfg, SearchConfig::new("Rapidgator.net"));
    }

    #[test]
    fn blank_hoster_fails_validation() {
        let err = SearchConfig::from_toml_str(r#"hoster = "   ""#).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = SearchConfig::from_toml_str(
            r#"
hoster = "DDownload.com"
base_url = "https://elsewhere.example/"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SearchConfig::load_from_file(Path::new("/non/existent/hdworld.toml")).unwrap_err();
        assert!(matches!(err, SearchError::ConfigIo(_)));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        assert!(default_config_path().ends_with("hdworld.toml"));
    }
}
