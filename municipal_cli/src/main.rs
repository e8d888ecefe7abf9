mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use municipal_lib::{Client, Config};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "munidata")]
#[command(about = "Query South African municipal finance data")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Backend base URL (overrides MUNICIPAL_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query line items for a municipality and year
    Query(commands::query::QueryArgs),
    /// Ask for data in plain English
    Ask(commands::ask::AskArgs),
    /// List the item codes available for a municipality and year
    Items(commands::items::ItemsArgs),
    /// Forecast allocations from historical rows
    Forecast(commands::forecast::ForecastArgs),
    /// List known municipality codes
    Municipalities,
}

/// `RUST_LOG` plus info for every workspace crate (`municipal_api`,
/// `municipal_lib`, `municipal_cli`).
fn log_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env().add_directive("municipal=info".parse()?))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = Config::resolve(cli.base_url.as_deref())?;
    let client = Client::with_base_url(&config.base_url);
    tracing::debug!("Using backend {}", client.base_url());

    let code = match &cli.command {
        Commands::Query(args) => commands::query::run(args, &client, &format).await?,
        Commands::Ask(args) => commands::ask::run(args, &client, &format).await?,
        Commands::Items(args) => {
            commands::items::run(args, &client, &format).await?;
            ExitCode::SUCCESS
        }
        Commands::Forecast(args) => {
            commands::forecast::run(args, &client, &format).await?;
            ExitCode::SUCCESS
        }
        Commands::Municipalities => {
            commands::municipalities::run(&format)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
