use anyhow::Result;
use municipal_lib::catalog;

use crate::output::{print_municipalities, OutputFormat};

pub fn run(format: &OutputFormat) -> Result<()> {
    print_municipalities(catalog::MUNICIPALITIES, format)?;

    let years = catalog::year_choices(catalog::current_year());
    if let (Some(latest), Some(earliest)) = (years.first(), years.last()) {
        eprintln!("Financial years with data: {} down to {}", latest, earliest);
    }
    Ok(())
}
