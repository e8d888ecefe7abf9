//! Static reference data: the municipalities the backend names, and the
//! selectable years.

use chrono::Datelike;

/// Municipality code-to-name mapping used by the backend when it labels cells.
pub const MUNICIPALITIES: &[(&str, &str)] = &[
    ("CPT", "City of Cape Town"),
    ("JHB", "City of Johannesburg"),
    ("TSH", "City of Tshwane"),
    ("BUF", "Buffalo City"),
    ("EKU", "Ekurhuleni"),
    ("ETH", "eThekwini"),
];

/// Earliest financial year the dataset covers.
pub const FIRST_YEAR: i32 = 2009;

/// Looks up the display name for a municipality code, case-insensitive.
pub fn municipality_name(code: &str) -> Option<&'static str> {
    let upper = code.trim().to_uppercase();
    MUNICIPALITIES
        .iter()
        .find(|(c, _)| *c == upper)
        .map(|(_, name)| *name)
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Years offered for selection: the previous year down to [`FIRST_YEAR`].
pub fn year_choices(current_year: i32) -> Vec<i32> {
    (FIRST_YEAR..current_year).rev().collect()
}
