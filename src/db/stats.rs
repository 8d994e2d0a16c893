use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count = count_records(&pool.conn)?;
    println!(
        "{}• Total inspections:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) TIMESTAMP RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM inspections ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM inspections ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Recorded between:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    Ok(())
}

/// Run SQLite's own integrity check and report the verdict.
pub fn check_integrity(pool: &mut DbPool) -> AppResult<String> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(verdict)
}
