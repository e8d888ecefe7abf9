use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use municipal_lib::forecast::{build_forecast_rows, failure_message, parse_nl_data};
use municipal_lib::Client;

use crate::output::{print_forecast, OutputFormat};

#[derive(Args)]
pub struct ForecastArgs {
    /// JSON file with historical rows (an array, or an object with `nl_data`). Use - for stdin
    #[arg(long, short = 'i')]
    pub input: PathBuf,
}

pub async fn run(args: &ForecastArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read forecast input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read {}", args.input.display()))?
    };

    let nl_data = parse_nl_data(&text)?;
    if nl_data.is_empty() {
        anyhow::bail!("forecast input contains no rows");
    }

    let entries = client
        .get_forecast(&nl_data)
        .await
        .map_err(|e| anyhow::anyhow!(failure_message(&e)))?;

    if entries.is_empty() {
        eprintln!("The backend returned no forecast lines.");
        return Ok(());
    }
    print_forecast(&build_forecast_rows(&entries), format)
}
