use crate::models::TableRow;
use crate::models::Position;
use crate::utils::colors::{YELLOW, colorize_optional, paint};
use crate::utils::formatting::{hours, us_date};
use crate::utils::table::Table;

/// Row list as shown by `list`. Zero hours and unknown positions are
/// highlighted since the service will reject them.
pub fn render_rows(rows: &[TableRow]) -> String {
    let mut table = Table::new(&["#", "Date", "Hours", "Position", "Location", ""]);

    for (i, row) in rows.iter().enumerate() {
        let e = &row.entry;

        let hours_cell = if e.hours == 0.0 {
            colorize_optional("", "0")
        } else {
            hours(e.hours)
        };

        let position_cell = if e.position.is_empty() || Position::is_recognized(&e.position) {
            colorize_optional(&e.position, "--")
        } else {
            paint(&e.position, YELLOW)
        };

        table.add_row(vec![
            (i + 1).to_string(),
            us_date(&e.date),
            hours_cell,
            position_cell,
            colorize_optional(&e.location, "--"),
            if row.is_editing { "editing".to_string() } else { String::new() },
        ]);
    }

    table.render()
}
