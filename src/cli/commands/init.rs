use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::{AuditOp, ttlog};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    let cfg = Config {
        database: db_path.to_string_lossy().to_string(),
        ..Config::load()?
    };

    println!("⚙️  Initializing rClock…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::open(&cfg)?;

    success(format!("Database initialized at {}", &cfg.database));

    if let Err(e) = ttlog(
        &pool.conn,
        AuditOp::Init,
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
