//! Row construction and field edits.

use crate::errors::{AppError, AppResult};
use crate::models::{EntryField, TimesheetEntry};
use crate::utils::date;
use chrono::NaiveDate;

/// Blank entry dated today, zero hours, no position or location.
pub fn create_row() -> TimesheetEntry {
    create_row_on(date::today())
}

pub fn create_row_on(today: NaiveDate) -> TimesheetEntry {
    TimesheetEntry {
        date: today,
        hours: 0.0,
        position: String::new(),
        location: String::new(),
    }
}

/// Return `row` with `field` set from user input.
///
/// - `date`: empty or unparseable input falls back to today.
/// - `hours`: empty input is `0`; anything else must be a non-negative number.
/// - `position` / `location`: stored verbatim.
pub fn update_field(row: &TimesheetEntry, field: EntryField, value: &str) -> AppResult<TimesheetEntry> {
    update_field_on(row, field, value, date::today())
}

pub fn update_field_on(
    row: &TimesheetEntry,
    field: EntryField,
    value: &str,
    today: NaiveDate,
) -> AppResult<TimesheetEntry> {
    let mut updated = row.clone();

    match field {
        EntryField::Date => {
            updated.date = date::parse_free_form(value).unwrap_or(today);
        }
        EntryField::Hours => {
            updated.hours = parse_hours(value)?;
        }
        EntryField::Position => updated.position = value.to_string(),
        EntryField::Location => updated.location = value.to_string(),
    }

    Ok(updated)
}

fn parse_hours(value: &str) -> AppResult<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(h) if h.is_finite() && h >= 0.0 => Ok(h),
        _ => Err(AppError::InvalidHours(value.to_string())),
    }
}
