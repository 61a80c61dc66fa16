use crate::cli::commands::{apply_fields, open_session, save_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Update fields of a row, or toggle its editing state when no field is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { row, fields } = cmd {
        let (pool, mut session) = open_session(cfg)?;
        let id = session.row_id_at(*row)?;

        if fields.is_empty() {
            let editing = session.toggle_edit(id)?;
            save_session(&pool, &session)?;
            success(format!(
                "Row {} {}",
                row,
                if editing { "is being edited" } else { "saved" }
            ));
            return Ok(());
        }

        apply_fields(&mut session, id, fields)?;
        save_session(&pool, &session)?;

        log::ttlog_quiet(&pool.conn, "edit", &row.to_string(), "row updated");
        success(format!("Row {} updated", row));
    }
    Ok(())
}
