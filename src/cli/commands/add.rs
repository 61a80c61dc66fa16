use crate::cli::commands::{apply_fields, open_session, save_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::Position;
use crate::ui::messages::{success, warning};

/// Add a row, then apply the given fields to it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let (pool, mut session) = open_session(cfg)?;

        let id = session.add_row();
        apply_fields(&mut session, id, fields)?;
        save_session(&pool, &session)?;

        if let Some(pos) = &fields.position
            && !Position::is_recognized(pos)
        {
            warning(format!("'{}' is not a recognized position", pos));
        }

        let number = session.rows().len();
        log::ttlog_quiet(&pool.conn, "add", &number.to_string(), "row added");
        success(format!("Row {} added", number));
    }
    Ok(())
}
