//! Data source configuration.

use anyhow::{Context, Result};
use reqwest::Url;

/// Socrata resource for the national COVID-19 case register.
pub const DEFAULT_SOURCE: &str = "https://www.datos.gov.co/resource/gt2j-8ykr.json";

/// Maximum number of rows requested from the source.
pub const DEFAULT_LIMIT: usize = 20_000;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Where and how to load the case records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// HTTP(S) endpoint, or a path to a local JSON file with the same shape.
    pub source: String,
    /// Row cap sent as the `$limit` query parameter. Not enforced locally.
    pub limit: usize,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http")
    }

    /// The source URL with the row limit appended.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not a valid URL.
    pub fn request_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.source)
            .with_context(|| format!("invalid source URL '{}'", self.source))?;
        url.query_pairs_mut()
            .append_pair("$limit", &self.limit.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SourceConfig::default();

        assert!(config.is_remote());
        assert_eq!(config.limit, 20_000);
    }

    #[test]
    fn test_request_url_appends_limit() {
        let config = SourceConfig {
            limit: 500,
            ..Default::default()
        };

        let url = config.request_url().unwrap();

        assert_eq!(url.host_str(), Some("www.datos.gov.co"));
        let limit = url
            .query_pairs()
            .find(|(k, _)| k == "$limit")
            .map(|(_, v)| v.into_owned());
        assert_eq!(limit.as_deref(), Some("500"));
    }

    #[test]
    fn test_request_url_keeps_existing_query() {
        let config = SourceConfig {
            source: "https://example.org/data.json?departamento_nom=VALLE".to_string(),
            ..Default::default()
        };

        let url = config.request_url().unwrap();

        assert_eq!(url.query_pairs().count(), 2);
    }

    #[test]
    fn test_local_path_is_not_remote() {
        let config = SourceConfig {
            source: "fixtures/cases.json".to_string(),
            ..Default::default()
        };

        assert!(!config.is_remote());
        assert!(config.request_url().is_err());
    }
}
