use serde::{Deserialize, Serialize};

/// Default stroke colour of the trend line.
pub const DEFAULT_BORDER_COLOR: &str = "#007bff";
/// Default fill colour of the area under the trend line.
pub const DEFAULT_FILL_COLOR: &str = "rgba(0, 123, 255, 0.1)";
/// Default curve smoothing.
pub const DEFAULT_TENSION: f64 = 0.3;

/// A single-series line chart description, handed to the chart surface.
///
/// The core computes labels and values; the surface only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSpec {
    /// X-axis labels, one per data point, in input order
    pub labels: Vec<String>,

    pub dataset: LineDataset,

    /// Resize with the container
    pub responsive: bool,

    /// When false the y axis is fitted to the data instead of starting at zero
    pub begin_at_zero: bool,
}

/// The single dataset of a [`LineChartSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDataset {
    /// Legend label (e.g., "Cheapest Price (AUD)")
    pub label: String,

    /// Y values; `NaN` marks a gap
    pub data: Vec<f64>,

    pub border_color: String,
    pub background_color: String,

    /// Fill the area beneath the line
    pub fill: bool,

    pub tension: f64,
}

impl LineChartSpec {
    pub fn new(label: impl Into<String>, labels: Vec<String>, data: Vec<f64>) -> Self {
        Self {
            labels,
            dataset: LineDataset {
                label: label.into(),
                data,
                border_color: DEFAULT_BORDER_COLOR.to_string(),
                background_color: DEFAULT_FILL_COLOR.to_string(),
                fill: true,
                tension: DEFAULT_TENSION,
            },
            responsive: true,
            begin_at_zero: false,
        }
    }

    /// Number of plotted points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dataset.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.data.is_empty()
    }
}
