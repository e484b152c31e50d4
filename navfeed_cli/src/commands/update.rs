use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use navfeed_lib::vanguard_api::Client;
use navfeed_lib::{observations_from_history, refresh, JsonFileStore, DEFAULT_WINDOW_DAYS};

use crate::output::{print_series, OutputFormat};

#[derive(Args)]
pub struct UpdateArgs {
    /// Vanguard fund identifier
    #[arg(long, default_value = "2070")]
    pub fund_id: String,

    /// Path of the stored series file
    #[arg(long, default_value = "nav_prices.json")]
    pub data: PathBuf,

    /// Days of history to retain
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub window_days: u32,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

pub async fn run(args: &UpdateArgs, format: &OutputFormat) -> Result<()> {
    let client = match &args.base_url {
        Some(url) => Client::with_base_url(url),
        None => Client::new(),
    };

    let resp = client.get_price_history(&args.fund_id).await?;
    let incoming = observations_from_history(&resp)?;

    let store = JsonFileStore::new(&args.data);
    let today = chrono::Local::now().date_naive();
    let series = refresh(&store, &incoming, today, args.window_days)?;

    eprintln!("{} entries retained in {}", series.len(), args.data.display());
    print_series(&series, format);

    Ok(())
}
