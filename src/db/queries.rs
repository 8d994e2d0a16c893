use crate::errors::AppResult;
use crate::models::record::{InspectionRecord, NewRecord, now_timestamp};
use rusqlite::{Connection, Result, Row, params};

/// Insert one validated record.
///
/// The store assigns the timestamp and the id; the caller never supplies
/// either. The INSERT runs in autocommit mode, so the row is durable before
/// this function returns. Storage faults bubble up unretried.
pub fn insert_record(conn: &Connection, rec: &NewRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO inspections
         (timestamp, temperature, humidity, water_level, lamp_count, extinguisher_count, inspector)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            now_timestamp(),
            rec.temperature,
            rec.humidity,
            rec.water_level,
            rec.lamp_count,
            rec.extinguisher_count,
            rec.inspector,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load every record in ascending id order (insertion order).
/// An empty store yields an empty vector, not an error.
pub fn load_all(conn: &Connection) -> AppResult<Vec<InspectionRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, timestamp, temperature, humidity, water_level,
                lamp_count, extinguisher_count, inspector
         FROM inspections
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<InspectionRecord> {
    Ok(InspectionRecord {
        id: row.get("id")?,
        timestamp: row.get("timestamp")?,
        temperature: row.get("temperature")?,
        humidity: row.get("humidity")?,
        water_level: row.get("water_level")?,
        lamp_count: row.get("lamp_count")?,
        extinguisher_count: row.get("extinguisher_count")?,
        inspector: row.get("inspector")?,
    })
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM inspections", [], |row| row.get(0))?;
    Ok(count)
}

/// Wipe the store: drop and recreate the `inspections` table so the next
/// insert gets id 1 again.
///
/// Runs as a single transaction; a crash mid-reset leaves either the full
/// prior state or the empty table, never a mix. The internal `log` table
/// survives so the wipe itself stays auditable.
pub fn reset_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        BEGIN;
        DROP TABLE IF EXISTS inspections;
        CREATE TABLE inspections (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp          TEXT NOT NULL,
            temperature        REAL NOT NULL,
            humidity           REAL NOT NULL,
            water_level        TEXT NOT NULL,
            lamp_count         INTEGER NOT NULL,
            extinguisher_count INTEGER NOT NULL,
            inspector          TEXT NOT NULL
        );
        COMMIT;
        "#,
    )?;
    Ok(())
}
