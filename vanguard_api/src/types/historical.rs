use serde::{Deserialize, Serialize};

/// Response payload of the price history endpoint.
///
/// The observations live at the fixed path `historicalPrice.nav[0].item`.
/// One call returns roughly the last two weeks of daily closes, so the
/// series has to be accumulated across runs.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPriceResponse {
    pub historical_price: HistoricalPrice,
}

#[derive(Serialize, Deserialize)]
pub struct HistoricalPrice {
    pub nav: Vec<NavSeries>,
}

#[derive(Serialize, Deserialize)]
pub struct NavSeries {
    pub item: Vec<NavItem>,
}

/// One dated close from the history payload.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// ISO 8601 timestamp with UTC offset, e.g. `2025-12-26T00:00:00-05:00`.
    /// Kept as delivered; date normalization happens downstream.
    pub as_of_date: String,

    pub price: f64,
}
