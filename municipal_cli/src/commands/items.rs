use anyhow::Result;
use clap::Args;
use municipal_lib::validation;
use municipal_lib::{AvailableItemsQuery, Client};

use crate::output::{print_items, OutputFormat};

#[derive(Args)]
pub struct ItemsArgs {
    /// Municipality (demarcation) code, e.g. CPT
    #[arg(long, short = 'm')]
    pub municipality: String,

    /// Financial year end
    #[arg(long, short = 'y')]
    pub year: i32,
}

pub async fn run(args: &ItemsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let municipality = validation::validate_municipality(&args.municipality)?;
    let year = validation::validate_year(Some(args.year))?;

    let items = client
        .get_available_items(&AvailableItemsQuery::new(&municipality, year))
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    eprintln!("{} item codes available for {} {}", items.len(), municipality, year);
    print_items(&items, format)
}
