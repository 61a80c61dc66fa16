// src/export/template.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::Position;
use rust_xlsxwriter::{Color, DataValidation, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "Timesheet";
pub const HEADERS: [&str; 4] = ["Date", "Hours", "Location", "Position"];

/// Rows offered with a position drop-down below the reserved block.
const VALIDATED_ROWS: u32 = 500;

/// Write an empty workbook in the layout `import` reads: a title row,
/// a header row and a legend row, then data from the fourth row on.
pub fn write_template(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Template(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet.write_with_format(0, 0, TITLE, &title_format)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(1, col as u16, *header, &header_format)?;
    }

    let labels: Vec<&str> = Position::ALL.iter().map(|p| p.label()).collect();
    let legend_format = Format::new().set_italic().set_font_color(Color::RGB(0x808080));
    let legend = format!("Positions: {}", labels.join(", "));
    worksheet.write_with_format(2, 0, legend.as_str(), &legend_format)?;

    let position_col = (HEADERS.len() - 1) as u16;
    let validation = DataValidation::new().allow_list_strings(&labels[..])?;
    worksheet.add_data_validation(3, position_col, 3 + VALIDATED_ROWS, position_col, &validation)?;

    if let Some(w) = labels.iter().map(|l| UnicodeWidthStr::width(*l)).max() {
        col_widths[position_col as usize] = col_widths[position_col as usize].max(w);
    }
    col_widths[0] = col_widths[0].max("MM/DD/YYYY".len());

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    worksheet.set_freeze_panes(3, 0)?;

    workbook.save(path)?;

    notify_export_success("Template", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::ImportLogic;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let p = env::temp_dir().join(format!("{name}_tsverify_template.xlsx"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn template_imports_as_empty() {
        let p = temp_path("empty_import");
        write_template(&p, false).unwrap();

        let bytes = fs::read(&p).unwrap();
        let rows = ImportLogic::ingest(&bytes).unwrap();
        assert!(rows.is_empty());
        fs::remove_file(&p).ok();
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let p = temp_path("no_overwrite");
        write_template(&p, false).unwrap();

        let err = write_template(&p, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        write_template(&p, true).unwrap();
        fs::remove_file(&p).ok();
    }
}
