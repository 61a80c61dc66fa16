//! Terminal rendering of a verification report.

use crate::core::evaluator::{evaluate, invalid_entry_details, position_details};
use crate::models::{EntryField, VerificationReport};
use crate::utils::colors::{RED, paint, status_badge};
use crate::utils::formatting::{bold, hours, us_date_str};

fn field_problem(field: EntryField) -> &'static str {
    match field {
        EntryField::Hours => "Hours are invalid",
        EntryField::Location => "Location is invalid",
        EntryField::Position => "Position is invalid",
        EntryField::Date => "Date is invalid",
    }
}

pub fn render_report(report: &VerificationReport) -> String {
    let verdict = evaluate(report);
    let mut out = String::new();

    out.push_str(&bold("Timesheet Verification Report"));
    out.push('\n');
    out.push_str(&format!("Overall Status: {}\n", status_badge(verdict.overall_valid)));
    out.push_str(&format!(
        "Email found: {}\n",
        if report.email_found { "yes" } else { "no" }
    ));

    out.push_str("\nDetails\n");
    out.push_str(&format!(
        "  Database Entries:  {}\n",
        report.number_of_database_entries
    ));
    out.push_str(&format!(
        "  Timesheet Entries: {}\n",
        report.number_of_timesheet_entries
    ));

    out.push_str("\nReported Hours\n");
    for p in position_details(report) {
        out.push_str(&format!(
            "  {}: Timesheet: {}, Database: {}\n",
            p.position,
            hours(p.timesheet),
            hours(p.database)
        ));
    }

    if !verdict.overall_valid {
        out.push_str("\nInvalid Entries\n");
        for entry in invalid_entry_details(report) {
            out.push_str(&format!("  {}\n", paint(&us_date_str(&entry.date), RED)));
            for field in entry.invalid_fields {
                out.push_str(&format!("    - {}\n", paint(field_problem(field), RED)));
            }
        }
    }

    out
}
