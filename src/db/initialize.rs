use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the `inspections` table exists.
///
/// Idempotent: safe to call at every startup, never drops or alters an
/// existing table, never touches existing rows.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS inspections (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp          TEXT NOT NULL,
            temperature        REAL NOT NULL,
            humidity           REAL NOT NULL,
            water_level        TEXT NOT NULL,
            lamp_count         INTEGER NOT NULL,
            extinguisher_count INTEGER NOT NULL,
            inspector          TEXT NOT NULL
        );
        "#,
    )?;

    ensure_log_table(conn)?;
    Ok(())
}

/// Ensure the internal `log` table exists.
pub fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
