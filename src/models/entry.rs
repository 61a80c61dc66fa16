use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical timesheet row.
///
/// `date` serializes as `YYYY-MM-DD`. An empty `position` or `location`
/// means "unset"; validity is decided by the verification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub position: String,
    pub location: String,
}

/// Editable fields of a [`TimesheetEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Date,
    Hours,
    Position,
    Location,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Date => "date",
            EntryField::Hours => "hours",
            EntryField::Position => "position",
            EntryField::Location => "location",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_iso_date() {
        let e = TimesheetEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            hours: 3.5,
            position: "PSS".into(),
            location: "Main Campus".into(),
        };
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["date"], "2024-03-05");
        assert_eq!(v["hours"], 3.5);
        assert_eq!(v["position"], "PSS");
        assert_eq!(v["location"], "Main Campus");
    }

    #[test]
    fn field_names_display_lowercase() {
        assert_eq!(EntryField::Hours.to_string(), "hours");
        assert_eq!(EntryField::Position.to_string(), "position");
    }
}
