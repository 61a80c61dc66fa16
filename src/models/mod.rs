pub mod entry;
pub mod position;
pub mod report;
pub mod row;

pub use entry::{EntryField, TimesheetEntry};
pub use position::Position;
pub use report::{InvalidEntry, VerificationReport};
pub use row::TableRow;
