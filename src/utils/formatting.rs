//! Formatting utilities used for CLI output.

use crate::utils::date::parse_free_form;
use chrono::NaiveDate;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `MM/DD/YYYY`, the way dates are shown to the user.
pub fn us_date(date: &NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Reformat a date string coming from the service; unreadable input is
/// returned unchanged.
pub fn us_date_str(raw: &str) -> String {
    parse_free_form(raw)
        .map(|d| us_date(&d))
        .unwrap_or_else(|| raw.to_string())
}

/// Hours without a trailing `.0`.
pub fn hours(h: f64) -> String {
    format!("{h}")
}
