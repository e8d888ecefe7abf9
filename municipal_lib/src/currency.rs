//! South African rand formatting.
//!
//! en-ZA currency layout with two fraction digits: symbol `R`, no-break space,
//! digit groups of three separated by no-break spaces, and a comma decimal mark.
//! Amounts that round to zero cents print unsigned.

use num_format::{CustomFormat, Grouping, Locale, ToFormattedString as _};

/// No-break space used between the symbol and the digits and between groups.
pub const NBSP: &str = "\u{a0}";

/// Formats a major-unit amount as rands with two decimal places.
pub fn format_zar(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;
    let rands = cents / 100;
    let fraction = cents % 100;

    let grouped = match CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator(NBSP)
        .build()
    {
        Ok(format) => rands.to_formatted_string(&format),
        Err(_) => rands.to_formatted_string(&Locale::en),
    };

    format!(
        "{}R{}{},{:02}",
        if negative { "-" } else { "" },
        NBSP,
        grouped,
        fraction
    )
}
