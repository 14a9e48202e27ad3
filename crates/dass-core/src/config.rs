//! Service Configuration
//!
//! Where the scoring and analysis services live.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const SCORING_PATH: &str = "/computeDASS";
pub const ANALYSIS_PATH: &str = "/processText";

/// Endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_scoring_url")]
    pub scoring_url: String,
    #[serde(default = "default_analysis_url")]
    pub analysis_url: String,
    /// Request timeout; `None` leaves it to the transport
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_scoring_url() -> String {
    join_url(DEFAULT_BASE_URL, SCORING_PATH)
}

fn default_analysis_url() -> String {
    join_url(DEFAULT_BASE_URL, ANALYSIS_PATH)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

impl ServiceConfig {
    /// Both endpoints under one base URL
    pub fn with_base_url(base: &str) -> Self {
        Self {
            scoring_url: join_url(base, SCORING_PATH),
            analysis_url: join_url(base, ANALYSIS_PATH),
            timeout_secs: None,
        }
    }

    /// Apply overrides; empty values are ignored
    pub fn with_overrides(
        mut self,
        base_url: Option<&str>,
        scoring_url: Option<&str>,
        analysis_url: Option<&str>,
    ) -> Self {
        if let Some(base) = non_blank(base_url) {
            let timeout = self.timeout_secs;
            self = Self::with_base_url(base);
            self.timeout_secs = timeout;
        }
        if let Some(url) = non_blank(scoring_url) {
            self.scoring_url = url.to_string();
        }
        if let Some(url) = non_blank(analysis_url) {
            self.analysis_url = url.to_string();
        }
        self
    }
}

/// Trimmed override, `None` when blank
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ServiceConfig::default();
        assert_eq!(config.scoring_url, "http://localhost:5000/computeDASS");
        assert_eq!(config.analysis_url, "http://localhost:5000/processText");
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ServiceConfig::with_base_url("https://dass.example.org/api/");
        assert_eq!(config.scoring_url, "https://dass.example.org/api/computeDASS");
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::default().with_overrides(
            Some("http://10.0.0.2:8000"),
            None,
            Some("http://nlp.local/analyze"),
        );
        assert_eq!(config.scoring_url, "http://10.0.0.2:8000/computeDASS");
        assert_eq!(config.analysis_url, "http://nlp.local/analyze");

        let trimmed = ServiceConfig::default().with_overrides(None, Some(" http://s/score \n"), None);
        assert_eq!(trimmed.scoring_url, "http://s/score");

        let unchanged = ServiceConfig::default().with_overrides(Some("  "), Some(""), None);
        assert_eq!(unchanged, ServiceConfig::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"scoring_url": "http://s/score", "timeout_secs": 10}"#).unwrap();
        assert_eq!(config.scoring_url, "http://s/score");
        assert_eq!(config.analysis_url, "http://localhost:5000/processText");
        assert_eq!(config.timeout_secs, Some(10));
    }
}
