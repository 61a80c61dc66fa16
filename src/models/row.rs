use super::entry::TimesheetEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the editing session: the entry plus UI-only state.
///
/// Persisted as `{id, date, hours, position, location, isEditing}`.
/// Only `entry` ever leaves the machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: Uuid,
    #[serde(flatten)]
    pub entry: TimesheetEntry,
    pub is_editing: bool,
}

impl TableRow {
    pub fn new(entry: TimesheetEntry, is_editing: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry,
            is_editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn persisted_shape_is_flat() {
        let row = TableRow::new(
            TimesheetEntry {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                hours: 2.0,
                position: "ISFT Lead".into(),
                location: "North".into(),
            },
            true,
        );
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(v["date"], "2024-01-02");
        assert_eq!(v["isEditing"], true);
        assert!(v.get("entry").is_none());

        let back: TableRow = serde_json::from_value(v).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn fresh_rows_get_distinct_ids() {
        let entry = TimesheetEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            hours: 0.0,
            position: String::new(),
            location: String::new(),
        };
        let a = TableRow::new(entry.clone(), false);
        let b = TableRow::new(entry, false);
        assert_ne!(a.id, b.id);
    }
}
