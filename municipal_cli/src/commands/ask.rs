use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use municipal_lib::{Client, QueryForm};

use crate::output::OutputFormat;

use super::submit::submit_and_render;

#[derive(Args)]
pub struct AskArgs {
    /// Plain-English request, e.g. "refuse spending in Cape Town 2021"
    #[arg(required = true, num_args = 1..)]
    pub request: Vec<String>,
}

pub async fn run(args: &AskArgs, client: &Client, format: &OutputFormat) -> Result<ExitCode> {
    let text = args.request.join(" ");
    let mut form = QueryForm::natural_language(&text);
    submit_and_render(&mut form, &format!("\"{}\"", text.trim()), client, format).await
}
