use crate::cli::commands::open_session;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::notification;
use crate::ui::report::render_report;
use crate::verify::HttpTransport;
use chrono::Utc;

/// Submit the session rows and print the resulting report.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (pool, mut session) = open_session(cfg)?;
    let transport = HttpTransport::new(&cfg.endpoint)?;

    let outcome = session.submit(&transport).map(render_report);

    let message = match &outcome {
        Ok(_) => "verification report received".to_string(),
        Err(e) => e.to_string(),
    };
    log::ttlog_quiet(&pool.conn, "submit", transport.endpoint(), &message);

    let rendered = outcome?;
    if let Some(n) = session.active_notification(Utc::now()) {
        notification(n);
    }
    println!();
    print!("{}", rendered);
    Ok(())
}
