use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::analysis::AnalysisResult;
use crate::models::route::RouteQuery;

/// Source of offers and price trends for a route.
///
/// The HTTP client implements this for the hosted API; tests and embedders
/// can substitute their own implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AnalysisProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch current offers and price trends for `query`.
    async fn analyze_route(&self, query: &RouteQuery) -> Result<AnalysisResult, CoreError>;
}

/// Generates a natural-language summary from an analysis result.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait InsightProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Summarize `analysis`. The whole result is sent as the request body.
    async fn generate_insights(&self, analysis: &AnalysisResult) -> Result<String, CoreError>;
}
