use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Nothing to do. Use `log --print` to show the internal log.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        ensure_schema(&pool.conn)?;

        let rows = load_log(&pool.conn)?;
        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let table = Table::auto(
            &["Date", "Operation", "Message"],
            rows.into_iter().map(|(d, o, m)| vec![d, o, m]).collect(),
        );
        println!("{}", table.render());
    }
    Ok(())
}
