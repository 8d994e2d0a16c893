use crate::config::Config;
use crate::core::report;
use crate::db::initialize::ensure_schema;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::Table;

/// Print the chart input series.
///
/// The core does not render charts; it prints the three parallel columns
/// any external plotting tool can consume.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    ensure_schema(&pool.conn)?;

    let Some(series) = report::series(&pool.conn)? else {
        warning("No inspections to chart.");
        return Ok(());
    };

    let rows = (0..series.len())
        .map(|i| {
            vec![
                series.timestamps[i].clone(),
                series.temperatures[i].to_string(),
                series.humidities[i].to_string(),
            ]
        })
        .collect();

    let table = Table::auto(&["Timestamp", "Temperature", "Humidity"], rows);
    println!("{}", table.render());

    Ok(())
}
