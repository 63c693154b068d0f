use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which backend pipeline the analysis service should use.
///
/// The value is forwarded to the service as-is; unknown selectors are not
/// rejected client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSource(String);

impl DataSource {
    /// Amadeus flight-offers API (the service default).
    pub const API: &'static str = "api";
    /// Google Flights results scraped through SerpAPI.
    pub const SCRAPER: &'static str = "scraper";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn api() -> Self {
        Self::new(Self::API)
    }

    pub fn scraper() -> Self {
        Self::new(Self::SCRAPER)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::api()
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw, untrimmed values as read from the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub origin: String,
    pub destination: String,
    pub source: String,
}

impl FormInput {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            source: source.into(),
        }
    }
}

/// A validated route request, built at activation time and dropped once the
/// activation finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Origin airport/city code, whitespace-trimmed, never empty
    pub origin: String,

    /// Destination airport/city code, whitespace-trimmed, never empty
    pub destination: String,

    pub source: DataSource,

    /// When the user triggered the request
    pub requested_at: DateTime<Utc>,
}

impl RouteQuery {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        source: DataSource,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            source,
            requested_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.source)
    }
}
