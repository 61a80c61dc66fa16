use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite store with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Local store : {}", db_path));

    let pool = DbPool::new(&db_path)?;
    log::ttlog_quiet(&pool.conn, "init", "", &format!("Store initialized at {}", db_path));

    success("tsverify initialization completed!");
    Ok(())
}
