use std::sync::{Arc, Mutex};

use super::traits::{AnalysisView, ChartInstance};
use crate::models::chart::LineChartSpec;
use crate::models::route::FormInput;
use crate::models::table::TableRow;

/// In-memory model of the analysis page.
///
/// Holds exactly the state a browser page would show: form values, alerts
/// raised, visibility flags, insight text, table rows and charts drawn on the
/// canvas. Useful for headless runs and for asserting on rendered output.
#[derive(Debug)]
pub struct DocumentView {
    form: FormInput,
    alerts: Vec<String>,
    loading_visible: bool,
    results_visible: bool,
    insights_text: String,
    offer_rows: Vec<TableRow>,
    chart_section_visible: bool,
    charts: Arc<Mutex<Vec<ChartRecord>>>,
}

/// A chart ever drawn on the canvas, live or destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    pub spec: LineChartSpec,
    pub destroyed: bool,
}

struct DocumentChart {
    index: usize,
    charts: Arc<Mutex<Vec<ChartRecord>>>,
}

impl ChartInstance for DocumentChart {
    fn destroy(&mut self) {
        let mut charts = self.charts.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(record) = charts.get_mut(self.index) {
            record.destroyed = true;
        }
    }
}

impl Default for DocumentView {
    fn default() -> Self {
        Self {
            form: FormInput::default(),
            alerts: Vec::new(),
            loading_visible: false,
            results_visible: false,
            insights_text: String::new(),
            offer_rows: Vec::new(),
            chart_section_visible: true,
            charts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl DocumentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose form already holds `form`.
    pub fn with_form(form: FormInput) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Simulate the user editing the form.
    pub fn set_form(&mut self, form: FormInput) {
        self.form = form;
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    #[must_use]
    pub fn is_loading_visible(&self) -> bool {
        self.loading_visible
    }

    #[must_use]
    pub fn is_results_visible(&self) -> bool {
        self.results_visible
    }

    #[must_use]
    pub fn insights_text(&self) -> &str {
        &self.insights_text
    }

    #[must_use]
    pub fn offer_rows(&self) -> &[TableRow] {
        &self.offer_rows
    }

    /// The table body as HTML.
    #[must_use]
    pub fn offers_table_html(&self) -> String {
        self.offer_rows.iter().map(TableRow::to_html).collect()
    }

    #[must_use]
    pub fn is_chart_section_visible(&self) -> bool {
        self.chart_section_visible
    }

    /// Every chart drawn so far, in creation order.
    #[must_use]
    pub fn chart_history(&self) -> Vec<ChartRecord> {
        self.charts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of charts not yet destroyed.
    #[must_use]
    pub fn live_chart_count(&self) -> usize {
        self.charts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|c| !c.destroyed)
            .count()
    }

    /// The most recently drawn chart, if it is still live.
    #[must_use]
    pub fn current_chart(&self) -> Option<LineChartSpec> {
        self.charts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .filter(|c| !c.destroyed)
            .map(|c| c.spec.clone())
    }
}

impl AnalysisView for DocumentView {
    fn read_form(&self) -> FormInput {
        self.form.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn set_insights_text(&mut self, text: &str) {
        self.insights_text = text.to_string();
    }

    fn clear_offer_rows(&mut self) {
        self.offer_rows.clear();
    }

    fn append_offer_row(&mut self, row: TableRow) {
        self.offer_rows.push(row);
    }

    fn set_chart_section_visible(&mut self, visible: bool) {
        self.chart_section_visible = visible;
    }

    fn create_chart(&mut self, spec: &LineChartSpec) -> Box<dyn ChartInstance> {
        let mut charts = self.charts.lock().unwrap_or_else(|e| e.into_inner());
        charts.push(ChartRecord {
            spec: spec.clone(),
            destroyed: false,
        });
        Box::new(DocumentChart {
            index: charts.len() - 1,
            charts: Arc::clone(&self.charts),
        })
    }
}
