use crate::cli::commands::{open_session, save_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { row } = cmd {
        let (pool, mut session) = open_session(cfg)?;

        let id = session.row_id_at(*row)?;
        session.delete_row(id)?;
        save_session(&pool, &session)?;

        log::ttlog_quiet(&pool.conn, "del", &row.to_string(), "row deleted");
        success(format!("Row {} deleted", row));
    }
    Ok(())
}
