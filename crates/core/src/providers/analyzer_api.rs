use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::{AnalysisProvider, InsightProvider};
use crate::errors::CoreError;
use crate::models::analysis::AnalysisResult;
use crate::models::route::RouteQuery;
use crate::models::settings::Settings;

const ANALYZE_ROUTE_PATH: &str = "/api/analyze-route";
const GENERATE_INSIGHTS_PATH: &str = "/api/generate-insights";

const ANALYZE_FALLBACK_MESSAGE: &str = "Failed to fetch market data";
const INSIGHTS_FALLBACK_MESSAGE: &str = "Failed to generate insights";

/// Client for the route analyzer HTTP API.
///
/// - `GET  /api/analyze-route?origin=&destination=&source=` → offers + trends
/// - `POST /api/generate-insights` (body: the analysis result) → summary text
/// - `GET  /` → health message
///
/// Failed responses carry `{ "detail": ... }`; the detail becomes the error
/// message when present.
pub struct RouteAnalyzerApi {
    client: Client,
    base_url: String,
}

// ── API response types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct InsightsResponse {
    insights: String,
}

#[derive(Deserialize)]
struct HealthResponse {
    message: String,
}

impl RouteAnalyzerApi {
    /// Build a client from validated settings.
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        let settings = settings.clone().validated()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match settings.request_timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };
        let client = builder
            .build()
            .map_err(|e| CoreError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.api_base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full analysis URL for `query`, with every query value percent-encoded.
    #[must_use]
    pub fn analyze_route_url(&self, query: &RouteQuery) -> String {
        format!(
            "{}{ANALYZE_ROUTE_PATH}?origin={}&destination={}&source={}",
            self.base_url,
            urlencoding::encode(&query.origin),
            urlencoding::encode(&query.destination),
            urlencoding::encode(query.source.as_str()),
        )
    }

    #[must_use]
    pub fn generate_insights_url(&self) -> String {
        format!("{}{GENERATE_INSIGHTS_PATH}", self.base_url)
    }

    /// Call the root health endpoint and return its status message.
    pub async fn ping(&self) -> Result<String, CoreError> {
        let url = format!("{}/", self.base_url);
        debug!(%url, "pinging analyzer API");
        let resp = self.client.get(&url).send().await?;
        let health: HealthResponse = read_json(resp, "/", "Analyzer API is unavailable").await?;
        Ok(health.message)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AnalysisProvider for RouteAnalyzerApi {
    fn name(&self) -> &str {
        "RouteAnalyzerApi"
    }

    async fn analyze_route(&self, query: &RouteQuery) -> Result<AnalysisResult, CoreError> {
        let url = self.analyze_route_url(query);
        debug!(%url, "requesting route analysis");

        let resp = self.client.get(&url).send().await?;
        read_json(resp, ANALYZE_ROUTE_PATH, ANALYZE_FALLBACK_MESSAGE).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl InsightProvider for RouteAnalyzerApi {
    fn name(&self) -> &str {
        "RouteAnalyzerApi"
    }

    async fn generate_insights(&self, analysis: &AnalysisResult) -> Result<String, CoreError> {
        let url = self.generate_insights_url();
        debug!(
            %url,
            offers = analysis.offers.len(),
            trends = analysis.trends.len(),
            "requesting insights"
        );

        // `.json()` sets `Content-Type: application/json`.
        let resp = self.client.post(&url).json(analysis).send().await?;
        let body: InsightsResponse =
            read_json(resp, GENERATE_INSIGHTS_PATH, INSIGHTS_FALLBACK_MESSAGE).await?;
        Ok(body.insights)
    }
}

// ── Response handling ───────────────────────────────────────────────

/// Decode a 2xx body as `T`, or turn a failed response into `CoreError::Request`.
async fn read_json<T: DeserializeOwned>(
    resp: Response,
    endpoint: &str,
    fallback: &str,
) -> Result<T, CoreError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        // A failed response must still be JSON; anything else is a parse error.
        let error_body: Value = serde_json::from_str(&body)?;
        let detail = detail_message(error_body.get("detail"));
        warn!(
            endpoint,
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or(""),
            "analyzer API returned an error"
        );
        return Err(CoreError::Request {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: detail.clone().unwrap_or_else(|| fallback.to_string()),
            detail,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Usable text of a `detail` field. Empty and falsy values count as absent;
/// structured details (e.g. validation error lists) are rendered as JSON.
fn detail_message(detail: Option<&Value>) -> Option<String> {
    match detail? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_string_is_used() {
        let v = json!("Route not supported");
        assert_eq!(detail_message(Some(&v)).as_deref(), Some("Route not supported"));
    }

    #[test]
    fn falsy_details_are_absent() {
        for v in [json!(null), json!(""), json!(false), json!(0)] {
            assert_eq!(detail_message(Some(&v)), None, "{v}");
        }
        assert_eq!(detail_message(None), None);
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let v = json!([{"loc": ["query", "origin"], "msg": "field required"}]);
        let msg = detail_message(Some(&v)).unwrap();
        assert!(msg.contains("field required"));
    }
}
