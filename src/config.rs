use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the HTTP course schedule service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("student-roster/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ScheduleConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Loads a config from a JSON document. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse schedule config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ScheduleConfig::from_json(r#"{"base_url": "http://school.example"}"#).unwrap();
        assert_eq!(config.base_url, "http://school.example");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.user_agent.starts_with("student-roster/"));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ScheduleConfig::from_json("{}").unwrap(), ScheduleConfig::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = ScheduleConfig::from_json("{ base_url").unwrap_err();
        assert!(err.to_string().contains("schedule config"));
    }
}
