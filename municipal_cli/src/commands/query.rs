use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use municipal_lib::validation;
use municipal_lib::{Client, FormValues, QueryForm};

use crate::output::OutputFormat;

use super::submit::submit_and_render;

#[derive(Args)]
pub struct QueryArgs {
    /// Municipality (demarcation) code, e.g. CPT, JHB, ETH
    #[arg(long, short = 'm')]
    pub municipality: Option<String>,

    /// Financial year end (defaults to the current year)
    #[arg(long, short = 'y')]
    pub year: Option<i32>,

    /// Amount type: AUDA (audited actual), ACT (actual), ORGB (original budget), ADJB (adjusted budget)
    #[arg(long, default_value = "AUDA")]
    pub amount_type: String,

    /// Financial period (month 1-12). Omit for annual totals
    #[arg(long)]
    pub period: Option<u8>,

    /// Comma-separated item codes, e.g. 0200,0400
    #[arg(long)]
    pub items: Option<String>,
}

pub async fn run(args: &QueryArgs, client: &Client, format: &OutputFormat) -> Result<ExitCode> {
    let mut values = FormValues::default();
    if let Some(ref municipality) = args.municipality {
        values.municipality = municipality.clone();
    }
    if args.year.is_some() {
        values.year = args.year;
    }
    values.amount_type = validation::validate_amount_type(&args.amount_type)?;
    values.financial_period = args.period;
    if let Some(ref items) = args.items {
        values.item_codes = items.clone();
    }

    let description = describe(&values);
    let mut form = QueryForm::structured(values);
    submit_and_render(&mut form, &description, client, format).await
}

fn describe(values: &FormValues) -> String {
    let period = match values.financial_period {
        Some(p) => format!("period {}", p),
        None => "annual".to_string(),
    };
    format!(
        "{} {} {} ({})",
        values.municipality.trim(),
        values.year.map(|y| y.to_string()).unwrap_or_default(),
        values.amount_type.label(),
        period
    )
}
