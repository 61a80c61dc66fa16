//! Persisted session state, stored under the same keys a browser front end
//! would use: `userEmail` and `rows`.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::TableRow;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub const KEY_EMAIL: &str = "userEmail";
pub const KEY_ROWS: &str = "rows";

pub fn get_value(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_value(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn load_email(pool: &DbPool) -> AppResult<String> {
    Ok(get_value(pool, KEY_EMAIL)?.unwrap_or_default())
}

pub fn save_email(pool: &DbPool, email: &str) -> AppResult<()> {
    set_value(pool, KEY_EMAIL, email)
}

pub fn load_rows(pool: &DbPool) -> AppResult<Vec<TableRow>> {
    match get_value(pool, KEY_ROWS)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

pub fn save_rows(pool: &DbPool, rows: &[TableRow]) -> AppResult<()> {
    set_value(pool, KEY_ROWS, &serde_json::to_string(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::TimesheetEntry;
    use chrono::NaiveDate;

    fn sample_rows() -> Vec<TableRow> {
        vec![
            TableRow::new(
                TimesheetEntry {
                    date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                    hours: 4.5,
                    position: "PSS".into(),
                    location: "Main".into(),
                },
                false,
            ),
            TableRow::new(
                TimesheetEntry {
                    date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
                    hours: 0.0,
                    position: String::new(),
                    location: String::new(),
                },
                true,
            ),
        ]
    }

    #[test]
    fn empty_store_restores_blank_session() {
        let pool = DbPool::in_memory().unwrap();
        assert_eq!(load_email(&pool).unwrap(), "");
        assert!(load_rows(&pool).unwrap().is_empty());
    }

    #[test]
    fn email_and_rows_are_restored() {
        let pool = DbPool::in_memory().unwrap();
        let rows = sample_rows();

        save_email(&pool, "a@b.org").unwrap();
        save_rows(&pool, &rows).unwrap();
        save_email(&pool, "c@d.org").unwrap();

        assert_eq!(load_email(&pool).unwrap(), "c@d.org");
        assert_eq!(load_rows(&pool).unwrap(), rows);
    }

    #[test]
    fn rows_are_stored_with_ui_state() {
        let pool = DbPool::in_memory().unwrap();
        save_rows(&pool, &sample_rows()).unwrap();

        let raw = get_value(&pool, KEY_ROWS).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v[0]["date"], "2024-03-05");
        assert_eq!(v[1]["isEditing"], true);
        assert!(v[0]["id"].is_string());
    }

    #[test]
    fn corrupted_rows_are_reported() {
        let pool = DbPool::in_memory().unwrap();
        set_value(&pool, KEY_ROWS, "{not json").unwrap();
        assert!(matches!(load_rows(&pool), Err(AppError::Storage(_))));
    }
}
