//! Verdicts derived from a verification report.
//!
//! Everything here is a pure function of the report's fields.

use crate::models::{EntryField, InvalidEntry, VerificationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportEvaluation {
    pub entries_match: bool,
    pub hours_match: bool,
    pub has_invalid_entries: bool,
    pub overall_valid: bool,
}

/// Submitted vs authoritative total for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionHours {
    pub position: String,
    pub timesheet: f64,
    pub database: f64,
}

/// Fields the service rejected for one submitted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntryDetail {
    pub date: String,
    pub invalid_fields: Vec<EntryField>,
}

pub fn evaluate(report: &VerificationReport) -> ReportEvaluation {
    let entries_match = report.number_of_database_entries == report.number_of_timesheet_entries;
    let hours_match = hours_match(report);
    let has_invalid_entries = report
        .invalid_entries
        .iter()
        .any(|e| !e.is_fully_valid());

    ReportEvaluation {
        entries_match,
        hours_match,
        has_invalid_entries,
        overall_valid: entries_match && hours_match && !has_invalid_entries,
    }
}

/// Same positions on both sides with numerically equal totals.
/// A position missing on one side is a mismatch, even against `0`.
pub fn hours_match(report: &VerificationReport) -> bool {
    // BTreeMap equality is key-order independent and compares f64 by value
    report.database_hours == report.timesheet_hours
}

/// One line per position reported in the timesheet, database side
/// defaulting to `0`.
pub fn position_details(report: &VerificationReport) -> Vec<PositionHours> {
    report
        .timesheet_hours
        .iter()
        .map(|(position, hours)| PositionHours {
            position: position.clone(),
            timesheet: *hours,
            database: report.database_hours.get(position).copied().unwrap_or(0.0),
        })
        .collect()
}

pub fn invalid_fields(entry: &InvalidEntry) -> Vec<EntryField> {
    [
        (entry.hours, EntryField::Hours),
        (entry.location, EntryField::Location),
        (entry.position, EntryField::Position),
    ]
    .into_iter()
    .filter_map(|(valid, field)| (!valid).then_some(field))
    .collect()
}

pub fn invalid_entry_details(report: &VerificationReport) -> Vec<InvalidEntryDetail> {
    report
        .invalid_entries
        .iter()
        .map(|e| InvalidEntryDetail {
            date: e.date.clone(),
            invalid_fields: invalid_fields(e),
        })
        .collect()
}
