pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod email;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod positions;
pub mod submit;
pub mod template;

use crate::cli::parser::FieldArgs;
use crate::config::Config;
use crate::core::Session;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::EntryField;
use uuid::Uuid;

/// Open the local store and restore the persisted session.
pub(crate) fn open_session(cfg: &Config) -> AppResult<(DbPool, Session)> {
    let pool = DbPool::new(&cfg.database)?;
    let email = queries::load_email(&pool)?;
    let rows = queries::load_rows(&pool)?;
    let session = Session::restore(email, rows, cfg.notification_ttl());
    Ok((pool, session))
}

/// Persist email and rows after a mutation.
pub(crate) fn save_session(pool: &DbPool, session: &Session) -> AppResult<()> {
    queries::save_email(pool, session.email())?;
    queries::save_rows(pool, session.rows())
}

/// Apply every field given on the command line to one row.
pub(crate) fn apply_fields(session: &mut Session, id: Uuid, fields: &FieldArgs) -> AppResult<()> {
    let updates = [
        (EntryField::Date, &fields.date),
        (EntryField::Hours, &fields.hours),
        (EntryField::Position, &fields.position),
        (EntryField::Location, &fields.location),
    ];

    for (field, value) in updates {
        if let Some(v) = value {
            session.update_row(id, field, v)?;
        }
    }
    Ok(())
}
