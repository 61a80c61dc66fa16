use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::rows::render_rows;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_pool, session) = open_session(cfg)?;

    if session.email().is_empty() {
        info("No email set");
    } else {
        info(format!("Email: {}", session.email()));
    }

    if session.rows().is_empty() {
        println!("No rows.");
        return Ok(());
    }

    print!("{}", render_rows(session.rows()));
    Ok(())
}
