use serde::{Deserialize, Serialize};

/// Text shown in the offers table when there is nothing to list.
pub const NO_OFFERS_PLACEHOLDER: &str = "No current offers found.";

/// Number of columns in the offers table.
pub const OFFER_COLUMNS: usize = 4;

/// One row of the offers table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableRow {
    /// The single full-width row shown for an empty result.
    Placeholder(String),

    /// A flight offer: airline, formatted price, departure, arrival.
    Offer {
        airline: String,
        price: String,
        departure: String,
        arrival: String,
    },
}

impl TableRow {
    /// Cell texts in column order. A placeholder yields one spanning cell.
    #[must_use]
    pub fn cells(&self) -> Vec<&str> {
        match self {
            TableRow::Placeholder(text) => vec![text.as_str()],
            TableRow::Offer {
                airline,
                price,
                departure,
                arrival,
            } => vec![
                airline.as_str(),
                price.as_str(),
                departure.as_str(),
                arrival.as_str(),
            ],
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableRow::Placeholder(_))
    }

    /// Render as a `<tr>` element with HTML-escaped cell text.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            TableRow::Placeholder(text) => format!(
                "<tr><td colspan=\"{OFFER_COLUMNS}\">{}</td></tr>",
                escape_html(text)
            ),
            TableRow::Offer { .. } => {
                let cells: String = self
                    .cells()
                    .into_iter()
                    .map(|c| format!("<td>{}</td>", escape_html(c)))
                    .collect();
                format!("<tr>{cells}</tr>")
            }
        }
    }
}

impl std::fmt::Display for TableRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cells().join(" | "))
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
