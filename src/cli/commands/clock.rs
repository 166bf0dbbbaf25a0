use crate::cli::parser::{Commands, parse_category};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::action::ClockAction;
use crate::ui::messages::{success, warning};

/// Handle the `in` and `out` commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, args) = match cmd {
        Commands::In { args } => (ClockAction::In, args),
        Commands::Out { args } => (ClockAction::Out, args),
        _ => return Ok(()),
    };

    let requested = parse_category(args);

    let mut pool = DbPool::open(cfg)?;
    let category = ClockLogic::clock_in_out(&mut pool, action, &requested)?;

    let msg = match action {
        ClockAction::In => format!("Clocked in ({})", category),
        ClockAction::Out => format!("Clocked out ({})", category),
    };
    success(&msg);

    // Audit trail is best effort; the record itself is already committed.
    if let Err(e) = ttlog(&pool.conn, action.into(), category.as_str(), &msg) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
