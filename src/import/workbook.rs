// src/import/workbook.rs

use crate::errors::{AppError, AppResult};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

/// Title, header and legend rows at the top of the template.
pub(crate) const RESERVED_ROWS: u32 = 3;

/// One data row of the sheet, cells taken by position.
/// Column order in the template is date, hours, location, position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawRow {
    /// 0-based sheet row.
    pub index: u32,
    pub date: Data,
    pub hours: Data,
    pub location: Data,
    pub position: Data,
}

/// Open a workbook from memory and return the grid of its first sheet.
/// The format (xls, xlsx, ...) is sniffed from the content.
pub(crate) fn read_first_sheet(bytes: &[u8]) -> AppResult<Range<Data>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Workbook("workbook contains no sheets".to_string()))?;

    Ok(workbook.worksheet_range(&first)?)
}

/// Rows after the reserved block, addressed by absolute sheet position so an
/// empty leading row or column does not shift the layout.
pub(crate) fn data_rows(range: &Range<Data>) -> Vec<RawRow> {
    let Some((end_row, _)) = range.end() else {
        return Vec::new();
    };

    let cell = |row: u32, col: u32| range.get_value((row, col)).cloned().unwrap_or(Data::Empty);

    (RESERVED_ROWS..=end_row)
        .map(|r| RawRow {
            index: r,
            date: cell(r, 0),
            hours: cell(r, 1),
            location: cell(r, 2),
            position: cell(r, 3),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_rows_are_never_returned() {
        let mut range: Range<Data> = Range::new((0, 0), (4, 3));
        range.set_value((0, 0), Data::String("Title".into()));
        range.set_value((2, 3), Data::String("PSS".into()));
        range.set_value((3, 3), Data::String("ISFT Lead".into()));
        range.set_value((4, 2), Data::String("North".into()));

        let rows = data_rows(&range);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 3);
        assert_eq!(rows[0].position, Data::String("ISFT Lead".into()));
        assert_eq!(rows[1].location, Data::String("North".into()));
        assert_eq!(rows[1].date, Data::Empty);
    }

    #[test]
    fn positions_are_absolute_when_the_range_starts_late() {
        // used range begins at C5 (row 4, col 2)
        let mut range: Range<Data> = Range::new((4, 2), (4, 3));
        range.set_value((4, 2), Data::String("South".into()));
        range.set_value((4, 3), Data::String("PSS".into()));

        let rows = data_rows(&range);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 3);
        assert_eq!(rows[0].position, Data::Empty);
        assert_eq!(rows[1].location, Data::String("South".into()));
        assert_eq!(rows[1].date, Data::Empty);
    }

    #[test]
    fn short_sheets_have_no_data_rows() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 3));
        range.set_value((1, 0), Data::String("Date".into()));
        assert!(data_rows(&range).is_empty());
        assert!(data_rows(&Range::empty()).is_empty());
    }

    #[test]
    fn garbage_bytes_are_a_workbook_error() {
        let err = read_first_sheet(b"definitely not a spreadsheet").unwrap_err();
        assert!(matches!(err, AppError::Workbook(_)));
    }
}
