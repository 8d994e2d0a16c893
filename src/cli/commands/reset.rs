use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::authorize;
use crate::db::initialize::ensure_schema;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::reset_store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};

/// Wipe the store behind the admin gate.
///
/// Denied credentials leave the store untouched and are not an error of the
/// process: the user is told to retry and the command exits cleanly.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { user, password } = cmd {
        if !authorize(cfg, user, password) {
            error(AppError::AuthDenied);
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        ensure_schema(&pool.conn)?;
        reset_store(&pool.conn)?;

        if let Err(e) = oplog(&pool.conn, "reset", "inspections", "Store wiped by admin") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success("All inspections deleted. Record numbering restarts at 1.");
    }

    Ok(())
}
