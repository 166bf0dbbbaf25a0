use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { number } = cmd {
        let n = number.unwrap_or(cfg.log_rows);
        let pool = DbPool::open(cfg)?;
        LogLogic::print_log(&pool, n, cfg)?;
    }

    Ok(())
}
