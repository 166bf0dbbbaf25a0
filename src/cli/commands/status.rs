use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `status` and `last` commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(cfg)?;

    match cmd {
        Commands::Status => info(StatusLogic::status(&pool)?),
        Commands::Last => info(StatusLogic::last_span(&pool)?),
        _ => {}
    }

    Ok(())
}
