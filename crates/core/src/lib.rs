pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod view;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use models::{
    analysis::{AnalysisResult, AnalysisSummary},
    route::{DataSource, FormInput, RouteQuery},
    settings::Settings,
};
use providers::{
    analyzer_api::RouteAnalyzerApi,
    traits::{AnalysisProvider, InsightProvider},
};
use services::{chart_service::ChartRenderer, table_service::TableRenderer};
use tracing::{debug, error, info, warn};
use view::traits::AnalysisView;

use errors::CoreError;

/// Alert shown when origin or destination is blank.
pub const MISSING_ROUTE_MESSAGE: &str = "Please enter both origin and destination.";

/// Insight text used instead of calling the insight service when a route has no offers.
pub const NO_OFFERS_INSIGHT: &str =
    "No flight data was found for the selected route and date. Unable to generate insights.";

/// How a single activation ended.
#[derive(Debug)]
pub enum ActivationOutcome {
    /// Results were rendered and revealed.
    Completed(AnalysisSummary),

    /// The activation stopped with an error; the user has been alerted.
    Failed(CoreError),

    /// A newer activation started before this one finished. Nothing from
    /// this activation was applied after that point.
    Superseded,
}

impl ActivationOutcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, ActivationOutcome::Completed(_))
    }

    #[must_use]
    pub fn summary(&self) -> Option<&AnalysisSummary> {
        match self {
            ActivationOutcome::Completed(summary) => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&CoreError> {
        match self {
            ActivationOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Main entry point for the Route Analyzer core library.
///
/// Drives one "analyze" action end to end: read the form, validate, fetch
/// offers and trends, render the table and chart, fetch insights when there
/// are offers, and reveal the results.
///
/// Activations may overlap. Each takes a ticket from a counter, and only the
/// holder of the newest ticket may touch the view after a network call.
#[must_use]
pub struct RouteAnalysisController<V: AnalysisView> {
    settings: Settings,
    analysis: Arc<dyn AnalysisProvider>,
    insights: Arc<dyn InsightProvider>,
    table: TableRenderer,
    chart: Mutex<ChartRenderer>,
    view: Mutex<V>,
    /// Ticket of the most recent activation that passed validation.
    generation: AtomicU64,
}

impl<V: AnalysisView> std::fmt::Debug for RouteAnalysisController<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteAnalysisController")
            .field("api_base_url", &self.settings.api_base_url)
            .field("analysis", &self.analysis.name())
            .field("insights", &self.insights.name())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl<V: AnalysisView> RouteAnalysisController<V> {
    /// Create a controller over explicit providers.
    pub fn new(
        settings: Settings,
        analysis: Arc<dyn AnalysisProvider>,
        insights: Arc<dyn InsightProvider>,
        view: V,
    ) -> Self {
        let table = TableRenderer::new(settings.currency_symbol.clone());
        let chart = ChartRenderer::new(settings.chart_dataset_label.clone());
        Self {
            settings,
            analysis,
            insights,
            table,
            chart: Mutex::new(chart),
            view: Mutex::new(view),
            generation: AtomicU64::new(0),
        }
    }

    /// Create a controller that talks to the HTTP API at `settings.api_base_url`.
    pub fn with_http(settings: Settings, view: V) -> Result<Self, CoreError> {
        let settings = settings.validated()?;
        let api = Arc::new(RouteAnalyzerApi::new(&settings)?);
        Ok(Self::new(settings, api.clone(), api, view))
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Inspect the view.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.lock_view())
    }

    /// Modify the view (e.g. to simulate user input).
    pub fn with_view_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.lock_view())
    }

    /// Give the view back, dropping the controller.
    pub fn into_view(self) -> V {
        self.view.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether a trend chart is currently displayed.
    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.lock_chart().has_chart()
    }

    /// Read and validate the form without starting an activation.
    pub fn collect_query(&self) -> Result<RouteQuery, CoreError> {
        let form = self.lock_view().read_form();
        validate_input(&form, &self.settings.default_source)
    }

    // ── Activation ──────────────────────────────────────────────────

    /// Run one analysis, as triggered by the "analyze" button.
    ///
    /// Validation failures alert and return before any network call.
    /// Every other failure is logged and alerted once as
    /// `An error occurred: {message}`. The loading indicator is hidden on
    /// every exit unless a newer activation has taken over.
    pub async fn activate(&self) -> ActivationOutcome {
        // Reading the form, taking a ticket and preparing the view happen
        // under one lock so no other activation interleaves with them.
        let (query, ticket) = {
            let mut view = self.lock_view();
            let form = view.read_form();
            let query = match validate_input(&form, &self.settings.default_source) {
                Ok(query) => query,
                Err(e) => {
                    warn!(error = %e, "route analysis rejected");
                    view.alert(&e.to_string());
                    return ActivationOutcome::Failed(e);
                }
            };
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            view.set_loading_visible(true);
            view.set_results_visible(false);
            view.set_insights_text("");
            view.clear_offer_rows();
            (query, ticket)
        };
        info!(
            ticket,
            origin = %query.origin,
            destination = %query.destination,
            source = %query.source,
            "starting route analysis"
        );

        let result = self.run(ticket, &query).await;

        let mut view = self.lock_view();
        if !self.is_current(ticket) {
            debug!(ticket, "route analysis superseded by a newer activation");
            return ActivationOutcome::Superseded;
        }
        let outcome = match result {
            Ok(Some(summary)) => {
                info!(
                    ticket,
                    offers = summary.offer_count,
                    trends = summary.trend_count,
                    insights_requested = summary.insights_requested,
                    "route analysis complete"
                );
                ActivationOutcome::Completed(summary)
            }
            Ok(None) => ActivationOutcome::Superseded,
            Err(e) => {
                error!(ticket, kind = ?e.kind(), error = %e, "route analysis failed");
                view.alert(&format!("An error occurred: {e}"));
                ActivationOutcome::Failed(e)
            }
        };
        view.set_loading_visible(false);
        outcome
    }

    /// Steps after validation. `Ok(None)` means the ticket went stale while
    /// waiting on the network and nothing further was rendered.
    ///
    /// The ticket is checked while the view is locked, so a newer
    /// activation cannot start between the check and the writes it guards.
    async fn run(
        &self,
        ticket: u64,
        query: &RouteQuery,
    ) -> Result<Option<AnalysisSummary>, CoreError> {
        let analysis = self.analysis.analyze_route(query).await?;

        {
            let mut view = self.lock_view();
            if !self.is_current(ticket) {
                return Ok(None);
            }
            self.table.render(&mut *view, Some(analysis.offers.as_slice()));
            self.lock_chart().render(&mut *view, Some(analysis.trends.as_slice()));

            if !analysis.has_offers() {
                debug!(ticket, "no offers, skipping insight generation");
                view.set_insights_text(NO_OFFERS_INSIGHT);
                view.set_results_visible(true);
                return Ok(Some(summarize(&analysis, false, NO_OFFERS_INSIGHT.to_string())));
            }
        }

        let insights = self.insights.generate_insights(&analysis).await?;

        let mut view = self.lock_view();
        if !self.is_current(ticket) {
            return Ok(None);
        }
        view.set_insights_text(&insights);
        view.set_results_visible(true);
        Ok(Some(summarize(&analysis, true, insights)))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    fn lock_view(&self) -> MutexGuard<'_, V> {
        self.view.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_chart(&self) -> MutexGuard<'_, ChartRenderer> {
        self.chart.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn summarize(analysis: &AnalysisResult, insights_requested: bool, insights: String) -> AnalysisSummary {
    AnalysisSummary {
        offer_count: analysis.offers.len(),
        trend_count: analysis.trends.len(),
        insights_requested,
        insights,
    }
}

/// Build a [`RouteQuery`] from raw form values.
///
/// Origin and destination are trimmed and must not be empty. The source is
/// forwarded untouched; a blank source falls back to `default_source`.
pub fn validate_input(form: &FormInput, default_source: &str) -> Result<RouteQuery, CoreError> {
    let origin = form.origin.trim();
    let destination = form.destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(CoreError::Validation(MISSING_ROUTE_MESSAGE.to_string()));
    }

    let source = if form.source.trim().is_empty() {
        DataSource::new(default_source)
    } else {
        DataSource::new(form.source.clone())
    };

    Ok(RouteQuery::new(origin, destination, source))
}
