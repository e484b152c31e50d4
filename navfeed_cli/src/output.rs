use navfeed_lib::PriceEntry;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Date")]
    as_of_date: String,
    #[tabled(rename = "NAV")]
    net_asset_value: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    change_percentage: String,
}

fn build_price_rows(entries: &[PriceEntry]) -> Vec<PriceRow> {
    entries
        .iter()
        .map(|e| PriceRow {
            as_of_date: e.as_of_date.format("%m/%d/%Y").to_string(),
            net_asset_value: format!("{:.2}", e.net_asset_value),
            change: e.change.map(|c| format!("{:+.2}", c)).unwrap_or_default(),
            change_percentage: e
                .change_percentage
                .map(|c| format!("{:+.2}%", c))
                .unwrap_or_default(),
        })
        .collect()
}

pub fn print_series_table(entries: &[PriceEntry]) {
    println!("{}", Table::new(build_price_rows(entries)));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_series(entries: &[PriceEntry], format: &OutputFormat) {
    match format {
        OutputFormat::Table => print_series_table(entries),
        OutputFormat::Json => print_json(&entries),
    }
}
