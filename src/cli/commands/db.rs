use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::ensure_schema;
use crate::db::pool::DbPool;
use crate::db::stats::{check_integrity, print_db_info};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info: show, check } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ensure_schema(&pool.conn)?;

        if *show {
            print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            let verdict = check_integrity(&mut pool)?;
            if verdict == "ok" {
                success("Database integrity check passed.");
            } else {
                error(format!("Database integrity check failed: {verdict}"));
            }
        }

        if !*show && !*check {
            info("Nothing to do. Use `db --info` or `db --check`.");
        }
    }
    Ok(())
}
