use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::db::initialize::ensure_schema;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, write_export};
use crate::ui::messages::warning;
use std::path::Path;

/// Export the full table.
///
/// Format and destination default to the configured values; the output file
/// is overwritten on every export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file } = cmd {
        let format = match format {
            Some(f) => f.clone(),
            None => ExportFormat::parse(&cfg.export_format)?,
        };

        let target = file.clone().unwrap_or_else(|| cfg.export_file.clone());
        let path = Path::new(&target);

        let pool = DbPool::new(&cfg.database)?;
        ensure_schema(&pool.conn)?;

        let Some(rows) = report::export_rows(&pool.conn)? else {
            warning("No inspections to export.");
            return Ok(());
        };

        write_export(&rows, &format, path)?;

        if let Err(e) = oplog(
            &pool.conn,
            "export",
            &target,
            &format!("{} rows exported as {}", rows.len(), format.as_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
