use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::validate_record;
use crate::db::initialize::ensure_schema;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::AppResult;
use crate::models::record::RawFields;
use crate::ui::messages::success;

/// Record one inspection.
///
/// The six raw strings go through the validator in form order; the first
/// invalid field aborts the insert with its message and nothing is written.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        temperature,
        humidity,
        water_level,
        lamp_count,
        extinguisher_count,
        inspector,
    } = cmd
    {
        let raw = RawFields {
            temperature: temperature.clone(),
            humidity: humidity.clone(),
            water_level: water_level.clone(),
            lamp_count: lamp_count.clone(),
            extinguisher_count: extinguisher_count.clone(),
            inspector: inspector.clone(),
        };

        let record = validate_record(&raw)?;

        let pool = DbPool::new(&cfg.database)?;
        ensure_schema(&pool.conn)?;
        let id = insert_record(&pool.conn, &record)?;

        if let Err(e) = oplog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("Inspection recorded by {}", record.inspector),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Inspection #{id} recorded."));
    }

    Ok(())
}
