use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Hosted analysis API used when no other base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://airline-market-demand-analyzer-api.onrender.com";

/// Client configuration.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scheme + host (+ optional path prefix) of the analysis API, without a
    /// trailing slash.
    pub api_base_url: String,

    /// Prefix placed before every formatted offer price.
    pub currency_symbol: String,

    /// Legend label of the price trend line.
    pub chart_dataset_label: String,

    /// Source selector used when the form leaves it blank.
    pub default_source: String,

    /// Per-request timeout. `None` waits indefinitely.
    /// Ignored on wasm32, where the browser owns timeouts.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            currency_symbol: "₹".to_string(),
            chart_dataset_label: "Cheapest Price (AUD)".to_string(),
            default_source: "api".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::Configuration(format!("Failed to parse settings: {e}")))?;
        settings.validated()
    }

    /// Same settings pointed at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// Check invariants and normalize the base URL (trailing `/` removed).
    pub fn validated(mut self) -> Result<Self, CoreError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            return Err(CoreError::Configuration(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(CoreError::Configuration(format!(
                "api_base_url '{}' must start with http:// or https://",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(CoreError::Configuration(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.api_base_url = trimmed;
        Ok(self)
    }
}
