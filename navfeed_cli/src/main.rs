mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "navfeed")]
#[command(about = "Maintain a rolling JSON history of Vanguard fund NAV prices")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the recent price history and merge it into the stored series
    Update(commands::update::UpdateArgs),
    /// Fetch the single latest quote and merge it into the stored series
    Latest(commands::latest::LatestArgs),
    /// Merge a pre-fetched JSONP payload file into the stored series
    Import(commands::import::ImportArgs),
    /// Print the stored series
    Show(commands::show::ShowArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("navfeed=info".parse().unwrap())
                .add_directive("navfeed_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::Update(args) => commands::update::run(args, &format).await?,
        Commands::Latest(args) => commands::latest::run(args, &format).await?,
        Commands::Import(args) => commands::import::run(args, &format)?,
        Commands::Show(args) => commands::show::run(args, &format)?,
    }

    Ok(())
}
