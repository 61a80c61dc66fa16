// src/import/logic.rs

use super::cell_date::parse_cell_date;
use super::workbook::{RawRow, data_rows, read_first_sheet};
use crate::errors::{AppError, AppResult};
use crate::models::{TableRow, TimesheetEntry};
use calamine::Data;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static SPREADSHEET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(xls|xlsx)$").expect("spreadsheet extension pattern is valid")
});

pub struct ImportLogic;

impl ImportLogic {
    /// `true` for `.xls` / `.xlsx` file names, case-insensitive.
    pub fn is_spreadsheet_name(file_name: &str) -> bool {
        SPREADSHEET_NAME.is_match(file_name)
    }

    /// Check the file name, then ingest the bytes.
    ///
    /// A name that is not a spreadsheet rejects the whole file before any
    /// byte is parsed.
    pub fn ingest_file(file_name: &str, bytes: &[u8]) -> AppResult<Vec<TableRow>> {
        if !Self::is_spreadsheet_name(file_name) {
            return Err(AppError::UnsupportedFile(file_name.to_string()));
        }
        Self::ingest(bytes)
    }

    /// Turn the first sheet of a workbook into session rows.
    ///
    /// The three reserved rows are skipped. Rows without a position or
    /// without a parseable date are dropped silently; the verification
    /// service is the one reporting bad data.
    pub fn ingest(bytes: &[u8]) -> AppResult<Vec<TableRow>> {
        let range = read_first_sheet(bytes)?;
        let raw = data_rows(&range);
        let total = raw.len();

        let rows: Vec<TableRow> = raw
            .iter()
            .filter_map(normalize)
            .map(|entry| TableRow::new(entry, false))
            .collect();

        debug!(
            kept = rows.len(),
            dropped = total - rows.len(),
            "workbook ingested"
        );

        Ok(rows)
    }
}

/// Build the canonical entry for a raw row, or `None` if the row is dropped.
pub(crate) fn normalize(raw: &RawRow) -> Option<TimesheetEntry> {
    let position = cell_text(&raw.position);
    if position.is_empty() {
        debug!(row = raw.index + 1, "dropping row without position");
        return None;
    }

    let Some(date) = parse_cell_date(&raw.date) else {
        debug!(row = raw.index + 1, "dropping row with unparseable date");
        return None;
    };

    Some(TimesheetEntry {
        date,
        hours: cell_hours(&raw.hours),
        position,
        location: cell_text(&raw.location),
    })
}

/// Text content of a cell. Empty, zero and `false` cells count as unset.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if *f == 0.0 || f.is_nan() => String::new(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(0) => String::new(),
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "true".to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(dt) => dt.to_string(),
        Data::Bool(false) | Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Hours of a cell, `0` when the cell is empty, not a number or negative.
fn cell_hours(cell: &Data) -> f64 {
    let hours = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if hours.is_finite() && hours >= 0.0 {
        hours
    } else {
        0.0
    }
}
