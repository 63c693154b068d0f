use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One priced flight itinerary returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Carrier display name (or carrier code when the service has no name)
    pub airline: String,

    /// Total fare in the service's quote currency
    pub price: f64,

    /// Departure time as sent by the service (ISO timestamp or display text)
    pub departure: String,

    /// Arrival time as sent by the service
    pub arrival: String,

    /// Any additional fields, kept so the offer re-serializes unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Offer {
    pub fn new(
        airline: impl Into<String>,
        price: f64,
        departure: impl Into<String>,
        arrival: impl Into<String>,
    ) -> Self {
        Self {
            airline: airline.into(),
            price,
            departure: departure.into(),
            arrival: arrival.into(),
            extra: Map::new(),
        }
    }
}

/// Price block of a trend sample. The service encodes the amount as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPrice {
    pub total: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One (date, cheapest price) sample used to plot the price history line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Departure date label, used verbatim on the chart's x axis
    pub departure_date: String,

    pub price: TrendPrice,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TrendPoint {
    pub fn new(departure_date: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            departure_date: departure_date.into(),
            price: TrendPrice {
                total: total.into(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Numeric value of `price.total`, or `NaN` when it is not a number.
    #[must_use]
    pub fn price_value(&self) -> f64 {
        self.price.total.trim().parse().unwrap_or(f64::NAN)
    }
}

/// Everything the analysis service returns for one route.
///
/// The same value is posted back to the insight service, so unknown fields
/// are carried through `extra` rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub offers: Vec<Offer>,

    #[serde(default)]
    pub trends: Vec<TrendPoint>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    pub fn new(offers: Vec<Offer>, trends: Vec<TrendPoint>) -> Self {
        Self {
            offers,
            trends,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn has_offers(&self) -> bool {
        !self.offers.is_empty()
    }
}

/// What a finished activation rendered, returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub offer_count: usize,
    pub trend_count: usize,
    /// Whether the insight service was called (false when there were no offers)
    pub insights_requested: bool,
    pub insights: String,
}
