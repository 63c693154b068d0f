use crate::models::chart::LineChartSpec;
use crate::models::route::FormInput;
use crate::models::table::TableRow;

/// A drawn chart bound to the page's canvas.
///
/// Implementations release their drawing resources in `destroy`; the
/// instance is never used again afterwards.
pub trait ChartInstance: Send {
    fn destroy(&mut self);
}

/// The page surface the controller reads from and renders into.
///
/// A browser binding maps these calls onto DOM elements; [`DocumentView`]
/// keeps the same state in memory.
///
/// [`DocumentView`]: super::document::DocumentView
pub trait AnalysisView: Send {
    /// Current values of the origin, destination and source controls.
    fn read_form(&self) -> FormInput;

    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);

    fn set_loading_visible(&mut self, visible: bool);

    fn set_results_visible(&mut self, visible: bool);

    fn set_insights_text(&mut self, text: &str);

    // ── Offers table ────────────────────────────────────────────────

    fn clear_offer_rows(&mut self);

    fn append_offer_row(&mut self, row: TableRow);

    // ── Trend chart ─────────────────────────────────────────────────

    fn set_chart_section_visible(&mut self, visible: bool);

    /// Draw a new chart on the canvas. The canvas is free when this is called.
    fn create_chart(&mut self, spec: &LineChartSpec) -> Box<dyn ChartInstance>;
}
