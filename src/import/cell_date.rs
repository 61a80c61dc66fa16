// src/import/cell_date.rs

use crate::utils::date::parse_free_form;
use calamine::Data;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Serial number of 1970-01-01 in the 1900 spreadsheet date system.
const UNIX_EPOCH_SERIAL: f64 = 25569.0;
const SECONDS_PER_DAY: f64 = 86400.0;

/// Largest timestamp (in ms, either sign) accepted as a real date.
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

/// The three shapes a date can take in a worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellDate {
    /// Cell carrying a date type (date-formatted number or ISO date cell).
    Native(NaiveDateTime),
    /// Plain number, read as a spreadsheet serial day count.
    Serial(f64),
    /// Free text.
    Text(String),
}

impl CellDate {
    /// Classify a raw cell. Any other cell type cannot carry a date.
    pub fn from_cell(cell: &Data) -> Option<Self> {
        match cell {
            Data::DateTime(dt) if !dt.is_duration() => dt.as_datetime().map(CellDate::Native),
            Data::DateTimeIso(s) => parse_iso_datetime(s).map(CellDate::Native),
            Data::Float(f) => Some(CellDate::Serial(*f)),
            Data::Int(i) => Some(CellDate::Serial(*i as f64)),
            Data::String(s) => Some(CellDate::Text(s.clone())),
            _ => None,
        }
    }

    /// Calendar day this value denotes, or `None` when it is not a valid date.
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            CellDate::Native(dt) => Some(dt.date()),
            CellDate::Serial(serial) => serial_to_date(*serial),
            CellDate::Text(s) => parse_free_form(s),
        }
    }
}

/// Parse a cell straight to a calendar day.
pub fn parse_cell_date(cell: &Data) -> Option<NaiveDate> {
    CellDate::from_cell(cell)?.resolve()
}

/// `round((serial - 25569) * 86400 * 1000)`: milliseconds since the Unix epoch.
pub fn serial_to_timestamp_ms(serial: f64) -> Option<i64> {
    if !serial.is_finite() {
        return None;
    }

    let ms = ((serial - UNIX_EPOCH_SERIAL) * SECONDS_PER_DAY * 1000.0).round();
    if ms.abs() > MAX_TIMESTAMP_MS {
        return None;
    }

    Some(ms as i64)
}

/// UTC calendar day of a spreadsheet serial.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let ms = serial_to_timestamp_ms(serial)?;
    DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive())
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| s.parse::<NaiveDate>().ok()?.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unix_epoch_serials() {
        assert_eq!(serial_to_date(25569.0), Some(ymd(1970, 1, 1)));
        assert_eq!(serial_to_date(25570.0), Some(ymd(1970, 1, 2)));
        assert_eq!(serial_to_timestamp_ms(25570.0), Some(86_400_000));
    }

    #[test]
    fn modern_serials_and_fractions() {
        assert_eq!(serial_to_date(45292.0), Some(ymd(2024, 1, 1)));
        assert_eq!(serial_to_date(45356.0), Some(ymd(2024, 3, 5)));
        // 18:00 on the same day
        assert_eq!(serial_to_date(45292.75), Some(ymd(2024, 1, 1)));
    }

    #[test]
    fn serials_before_the_epoch() {
        assert_eq!(serial_to_date(25568.0), Some(ymd(1969, 12, 31)));
        assert_eq!(serial_to_date(0.0), Some(ymd(1899, 12, 30)));
    }

    #[test]
    fn non_finite_and_huge_serials_fail() {
        assert_eq!(serial_to_date(f64::NAN), None);
        assert_eq!(serial_to_date(f64::INFINITY), None);
        assert_eq!(serial_to_date(1e12), None);
    }

    #[test]
    fn dispatch_by_cell_type() {
        assert_eq!(
            CellDate::from_cell(&Data::Float(25569.0)),
            Some(CellDate::Serial(25569.0))
        );
        assert_eq!(
            CellDate::from_cell(&Data::Int(25570)),
            Some(CellDate::Serial(25570.0))
        );
        assert_eq!(
            CellDate::from_cell(&Data::String("2024-03-05".into())),
            Some(CellDate::Text("2024-03-05".into()))
        );
        assert_eq!(CellDate::from_cell(&Data::Empty), None);
        assert_eq!(CellDate::from_cell(&Data::Bool(true)), None);
    }

    #[test]
    fn iso_cells_are_native_dates() {
        let cell = Data::DateTimeIso("2024-03-05T09:30:00".into());
        assert_eq!(parse_cell_date(&cell), Some(ymd(2024, 3, 5)));

        let cell = Data::DateTimeIso("2024-03-05".into());
        assert_eq!(parse_cell_date(&cell), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn text_cells_use_free_form_parsing() {
        assert_eq!(
            parse_cell_date(&Data::String("03/05/2024".into())),
            Some(ymd(2024, 3, 5))
        );
        for text in [
            "3/5/2024 9:00 AM",
            "03/05/2024 09:00:00 PM",
            "Mar 5 2024 10:00",
            "2024-03-05 9:00:00 AM",
            "5-Mar-2024",
            "2024.03.05",
        ] {
            assert_eq!(parse_cell_date(&Data::String(text.into())), Some(ymd(2024, 3, 5)));
        }
        assert_eq!(parse_cell_date(&Data::String("soon".into())), None);
        assert_eq!(parse_cell_date(&Data::String(String::new())), None);
    }
}
