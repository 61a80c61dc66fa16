use crate::cli::commands::{open_session, save_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, notification};
use crate::utils::path::{expand_tilde, file_name};
use chrono::Utc;
use std::fs;

/// Replace the rows with the content of a workbook.
///
/// The file is read fully before parsing. The extension is checked first,
/// so a wrong file type never touches the disk content.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let (pool, mut session) = open_session(cfg)?;
        let name = file_name(file);

        let bytes = if crate::import::ImportLogic::is_spreadsheet_name(&name) {
            fs::read(expand_tilde(file))?
        } else {
            Vec::new()
        };

        let count = session.import_workbook(&name, &bytes)?;
        save_session(&pool, &session)?;

        log::ttlog_quiet(&pool.conn, "import", &name, &format!("{} rows loaded", count));
        if let Some(n) = session.active_notification(Utc::now()) {
            notification(n);
        }
        info(format!("{} rows loaded from {}", count, name));
    }
    Ok(())
}
