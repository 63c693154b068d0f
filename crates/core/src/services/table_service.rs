use crate::models::analysis::Offer;
use crate::models::table::{TableRow, NO_OFFERS_PLACEHOLDER};
use crate::view::traits::AnalysisView;

/// Projects offers into rows of the offers table.
///
/// Rows come out in input order: no sorting, filtering or deduplication.
/// Rendering always starts from an empty table body, so rendering the same
/// offers twice yields the same rows.
pub struct TableRenderer {
    currency_symbol: String,
}

impl TableRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Table rows for `offers`: one placeholder row when there are none,
    /// otherwise one row per offer.
    #[must_use]
    pub fn rows(&self, offers: Option<&[Offer]>) -> Vec<TableRow> {
        match offers {
            Some(offers) if !offers.is_empty() => {
                offers.iter().map(|offer| self.row_for(offer)).collect()
            }
            _ => vec![TableRow::Placeholder(NO_OFFERS_PLACEHOLDER.to_string())],
        }
    }

    /// Replace the view's table body with the rows for `offers`.
    /// Returns the number of offer rows written (0 when the placeholder is shown).
    pub fn render<V: AnalysisView + ?Sized>(&self, view: &mut V, offers: Option<&[Offer]>) -> usize {
        view.clear_offer_rows();
        let rows = self.rows(offers);
        let offer_rows = rows.iter().filter(|r| !r.is_placeholder()).count();
        for row in rows {
            view.append_offer_row(row);
        }
        offer_rows
    }

    fn row_for(&self, offer: &Offer) -> TableRow {
        TableRow::Offer {
            airline: offer.airline.clone(),
            price: format!("{}{}", self.currency_symbol, format_price(offer.price)),
            departure: offer.departure.clone(),
            arrival: offer.arrival.clone(),
        }
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new("₹")
    }
}

/// Format a price with exactly two decimals (1234.5 → "1234.50").
///
/// Ties round away from zero (0.125 → "0.13"), as a browser's
/// `toFixed(2)` does.
#[must_use]
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() / 100.0;
    // Negative zero prints as "-0.00"; show it as plain zero.
    let cents = if cents == 0.0 { 0.0 } else { cents };
    format!("{cents:.2}")
}
