use crate::models::analysis::TrendPoint;
use crate::models::chart::LineChartSpec;
use crate::view::traits::{AnalysisView, ChartInstance};

/// Owner of the single live chart instance.
///
/// Every replacement destroys the previous instance before the next one is
/// installed, so at most one chart is ever live. Dropping the handle
/// destroys whatever it still holds.
#[derive(Default)]
pub struct ChartHandle {
    current: Option<Box<dyn ChartInstance>>,
}

impl ChartHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy the held instance (if any) and install `next`.
    pub fn replace(&mut self, next: Option<Box<dyn ChartInstance>>) {
        self.replace_with(|| next);
    }

    /// Destroy the held instance (if any), then install whatever `create`
    /// returns. `create` runs only after the old instance is gone, so it may
    /// reuse the same canvas.
    pub fn replace_with<F>(&mut self, create: F)
    where
        F: FnOnce() -> Option<Box<dyn ChartInstance>>,
    {
        if let Some(mut old) = self.current.take() {
            old.destroy();
        }
        self.current = create();
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.replace(None);
    }
}

impl std::fmt::Debug for ChartHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartHandle")
            .field("live", &self.is_live())
            .finish()
    }
}

/// Turns price trend samples into the page's line chart.
///
/// - No samples: the held chart is destroyed and the chart section hidden.
/// - Samples: the section is shown and a fresh chart replaces the old one.
#[derive(Debug)]
pub struct ChartRenderer {
    handle: ChartHandle,
    dataset_label: String,
}

impl ChartRenderer {
    pub fn new(dataset_label: impl Into<String>) -> Self {
        Self {
            handle: ChartHandle::new(),
            dataset_label: dataset_label.into(),
        }
    }

    /// Chart description for `trends`: labels are the departure dates as
    /// given, values are `price.total` parsed as numbers.
    #[must_use]
    pub fn build_spec(&self, trends: &[TrendPoint]) -> LineChartSpec {
        let labels = trends.iter().map(|t| t.departure_date.clone()).collect();
        let data = trends.iter().map(TrendPoint::price_value).collect();
        LineChartSpec::new(self.dataset_label.clone(), labels, data)
    }

    /// Render `trends` into `view`. Returns the spec that was drawn, or
    /// `None` when the chart section was hidden.
    pub fn render<V: AnalysisView + ?Sized>(
        &mut self,
        view: &mut V,
        trends: Option<&[TrendPoint]>,
    ) -> Option<LineChartSpec> {
        let trends = match trends {
            Some(t) if !t.is_empty() => t,
            _ => {
                self.handle.replace(None);
                view.set_chart_section_visible(false);
                return None;
            }
        };

        view.set_chart_section_visible(true);
        let spec = self.build_spec(trends);
        self.handle.replace_with(|| Some(view.create_chart(&spec)));
        Some(spec)
    }

    /// Whether a chart is currently displayed.
    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.handle.is_live()
    }

    /// Destroy the displayed chart, if any.
    pub fn clear(&mut self) {
        self.handle.replace(None);
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new("Cheapest Price (AUD)")
    }
}
