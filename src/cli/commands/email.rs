use crate::cli::commands::{open_session, save_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Email { address } = cmd {
        let (pool, mut session) = open_session(cfg)?;

        match address {
            Some(addr) => {
                session.set_email(addr.trim());
                save_session(&pool, &session)?;
                log::ttlog_quiet(&pool.conn, "email", "", "email updated");
                success(format!("Email: {}", session.email()));
            }
            None if session.email().is_empty() => info("No email set"),
            None => info(format!("Email: {}", session.email())),
        }
    }
    Ok(())
}
