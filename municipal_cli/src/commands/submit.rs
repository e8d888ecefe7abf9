use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use municipal_lib::{AppState, Client, QueryForm, ShellView};

use crate::output::{print_form_status, print_shell, OutputFormat};

/// Runs one submission of `form` and renders the resulting view.
///
/// Validation failures are returned as errors before any request is made.
/// Request failures are rendered as the error banner and reported through
/// the exit code.
pub async fn submit_and_render(
    form: &mut QueryForm,
    description: &str,
    client: &Client,
    format: &OutputFormat,
) -> Result<ExitCode> {
    let mut store = AppState::new();
    let request = form.begin(&mut store)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("{} [{}]", description, form.submit_label()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = request.execute(client).await;
    spinner.finish_and_clear();

    if let Err(e) = form.settle(&mut store, outcome) {
        tracing::debug!("Submission failed: {}", e);
    }
    print_form_status(description, form.submit_label());

    let view = ShellView::from_state(&store);
    print_shell(&view, format)?;

    Ok(if view.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
