//! The price series model and the merge-and-retain routine.
//!
//! The persisted series is a flat JSON array consumed by Portfolio
//! Performance via JSON-path configuration (`$[*].asOfDate`,
//! `$[*].netAssetValue`), so the serialized field names and the
//! `MM/DD/YYYY` date form are a compatibility contract.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use vanguard_api::types::{FundQuote, HistoricalPriceResponse};

use crate::error::NavFeedError;

/// Days of history retained in the persisted series. The upstream API only
/// returns about two weeks per call, so the series is accumulated across
/// runs and trimmed to this trailing window on every run.
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

/// Stored date form. Serialization always zero-pads; parsing also accepts
/// unpadded digits, so `12/1/2025` and `12/01/2025` read back as the same
/// calendar date.
const DATE_FORMAT: &str = "%m/%d/%Y";

mod stored_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One observation of the fund's value on one date.
///
/// The change fields are serialized even when absent upstream; consumers
/// expect an explicit `null` rather than a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    #[serde(with = "stored_date")]
    pub as_of_date: NaiveDate,

    pub net_asset_value: f64,

    pub change: Option<f64>,

    pub change_percentage: Option<f64>,
}

/// The persisted collection: append order, no sorting.
pub type Series = Vec<PriceEntry>;

/// One incoming observation, in either of the two shapes the upstream
/// payloads deliver.
#[derive(Debug, Clone)]
pub enum Observation {
    /// From the history payload: an ISO 8601 timestamp with UTC offset
    /// (`2025-12-26T00:00:00-05:00`) and a bare price. The change fields
    /// are not provided in this shape.
    Historical { as_of: String, price: f64 },
    /// From the latest-price payload: already date-formatted, with the
    /// change fields carried through as delivered.
    Quote {
        as_of_date: String,
        net_asset_value: f64,
        change: Option<f64>,
        change_percentage: Option<f64>,
    },
}

impl From<FundQuote> for Observation {
    fn from(quote: FundQuote) -> Self {
        Self::Quote {
            as_of_date: quote.as_of_date,
            net_asset_value: quote.net_asset_value,
            change: quote.change,
            change_percentage: quote.change_percentage,
        }
    }
}

/// Extracts the observations from a history payload.
///
/// The items live at the fixed path `historicalPrice.nav[0].item`; a
/// payload with no nav series at all is malformed.
pub fn observations_from_history(
    resp: &HistoricalPriceResponse,
) -> Result<Vec<Observation>, NavFeedError> {
    let series = resp.historical_price.nav.first().ok_or_else(|| {
        NavFeedError::MalformedInput("history payload contains no nav series".to_string())
    })?;
    Ok(series
        .item
        .iter()
        .map(|item| Observation::Historical {
            as_of: item.as_of_date.clone(),
            price: item.price,
        })
        .collect())
}

/// Resolves an observation to the entry it would store.
///
/// A history timestamp is reduced to the calendar date in its embedded
/// offset; time-of-day and offset are discarded without any timezone
/// conversion.
fn entry_from_observation(obs: &Observation) -> Result<PriceEntry, NavFeedError> {
    match obs {
        Observation::Historical { as_of, price } => {
            let ts = DateTime::parse_from_rfc3339(as_of).map_err(|e| {
                NavFeedError::MalformedInput(format!("unparsable timestamp {:?}: {}", as_of, e))
            })?;
            Ok(PriceEntry {
                as_of_date: ts.date_naive(),
                net_asset_value: *price,
                change: None,
                change_percentage: None,
            })
        }
        Observation::Quote {
            as_of_date,
            net_asset_value,
            change,
            change_percentage,
        } => {
            let date = NaiveDate::parse_from_str(as_of_date, DATE_FORMAT).map_err(|e| {
                NavFeedError::MalformedInput(format!("unparsable date {:?}: {}", as_of_date, e))
            })?;
            Ok(PriceEntry {
                as_of_date: date,
                net_asset_value: *net_asset_value,
                change: *change,
                change_percentage: *change_percentage,
            })
        }
    }
}

/// Merges incoming observations into an existing series and trims the
/// result to the retention window.
///
/// New entries append at the end in input order; an observation whose date
/// is already present is skipped (first-seen wins, no update in place).
/// After the merge, only entries strictly newer than
/// `today - window_days` survive, so the series can shrink even when
/// nothing new arrives. Any unparsable incoming date aborts the whole
/// merge.
pub fn merge_observations(
    existing: Series,
    incoming: &[Observation],
    today: NaiveDate,
    window_days: u32,
) -> Result<Series, NavFeedError> {
    let mut series = existing;
    for obs in incoming {
        let entry = entry_from_observation(obs)?;
        if series.iter().any(|e| e.as_of_date == entry.as_of_date) {
            tracing::debug!("skipping duplicate entry for {}", entry.as_of_date);
            continue;
        }
        tracing::info!("added new entry for {}", entry.as_of_date.format(DATE_FORMAT));
        series.push(entry);
    }

    let cutoff = today - chrono::Duration::days(i64::from(window_days));
    let before = series.len();
    series.retain(|e| e.as_of_date > cutoff);
    if series.len() < before {
        tracing::info!("dropped {} entries older than {}", before - series.len(), cutoff);
    }

    Ok(series)
}
