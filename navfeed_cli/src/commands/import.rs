use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use navfeed_lib::types::{FundQuote, HistoricalPriceResponse};
use navfeed_lib::vanguard_api::jsonp;
use navfeed_lib::{
    observations_from_history, refresh, JsonFileStore, Observation, DEFAULT_WINDOW_DAYS,
};

use crate::output::{print_series, OutputFormat};

#[derive(Args)]
pub struct ImportArgs {
    /// Pre-fetched JSONP payload to import
    #[arg(long, default_value = "vanguard_raw.jsonp")]
    pub file: PathBuf,

    /// Path of the stored series file
    #[arg(long, default_value = "nav_prices.json")]
    pub data: PathBuf,

    /// Days of history to retain
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,
}

pub fn run(args: &ImportArgs, format: &OutputFormat) -> Result<()> {
    let body = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let json = jsonp::unwrap(&body)?;
    let incoming = parse_observations(json)?;

    let store = JsonFileStore::new(&args.data);
    let today = chrono::Local::now().date_naive();
    let series = refresh(&store, &incoming, today, args.window_days)?;

    eprintln!("{} entries retained in {}", series.len(), args.data.display());
    print_series(&series, format);

    Ok(())
}

/// A pre-fetched payload may be either upstream shape; the history payload
/// is tried first, then a single quote.
fn parse_observations(json: &str) -> Result<Vec<Observation>> {
    if let Ok(resp) = serde_json::from_str::<HistoricalPriceResponse>(json) {
        return Ok(observations_from_history(&resp)?);
    }
    let quote = serde_json::from_str::<FundQuote>(json)
        .context("payload is neither a price history nor a fund quote")?;
    Ok(vec![Observation::from(quote)])
}
