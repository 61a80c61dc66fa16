// src/import/mod.rs

mod cell_date;
pub mod logic;
mod workbook;

pub use cell_date::{CellDate, parse_cell_date, serial_to_date, serial_to_timestamp_ms};
pub use logic::ImportLogic;
