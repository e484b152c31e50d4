use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use navfeed_lib::{JsonFileStore, SeriesStore};

use crate::output::{print_series, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Path of the stored series file
    #[arg(long, default_value = "nav_prices.json")]
    pub data: PathBuf,
}

pub fn run(args: &ShowArgs, format: &OutputFormat) -> Result<()> {
    let store = JsonFileStore::new(&args.data);
    let series = store.load()?;
    print_series(&series, format);
    Ok(())
}
