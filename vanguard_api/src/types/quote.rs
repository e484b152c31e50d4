use serde::{Deserialize, Serialize};

/// Response payload of the latest-price endpoint.
///
/// Unlike the history payload this arrives already date-formatted
/// (`MM/DD/YYYY`) and carries the day-over-day change fields, which the
/// API sometimes leaves null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundQuote {
    pub as_of_date: String,

    pub net_asset_value: f64,

    #[serde(default)]
    pub change: Option<f64>,

    #[serde(default)]
    pub change_percentage: Option<f64>,
}
