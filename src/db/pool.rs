//! SQLite connection wrapper (lightweight for CLI usage).

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Connect to the configured database, creating its directory when
    /// missing. The schema is left untouched.
    pub fn connect(cfg: &Config) -> AppResult<Self> {
        let path = Path::new(&cfg.database);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let pool = Self::new(&cfg.database)?;
        pool.conn
            .busy_timeout(Duration::from_millis(cfg.busy_timeout_ms))?;
        Ok(pool)
    }

    /// Connect and bring the schema up to date. Safe to call on every
    /// invocation.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = Self::connect(cfg)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }
}
