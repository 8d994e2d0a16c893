use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::db::initialize::ensure_schema;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::model::{get_headers, record_to_row};
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { table } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ensure_schema(&pool.conn)?;

        if *table {
            match report::export_rows(&pool.conn)? {
                None => info("No inspections recorded yet."),
                Some(rows) => {
                    let rendered =
                        Table::auto(&get_headers(), rows.iter().map(record_to_row).collect());
                    println!("{}", rendered.render());
                }
            }
            return Ok(());
        }

        let blocks = report::listing(&pool.conn)?;
        if blocks.is_empty() {
            info("No inspections recorded yet.");
        } else {
            for block in blocks {
                println!("{block}\n");
            }
        }
    }
    Ok(())
}
