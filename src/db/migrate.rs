//! Idempotent schema management.
//!
//! Base tables are created with `IF NOT EXISTS`; every later change is a
//! named migration recorded in `log` as `migration_applied`, so each one
//! runs exactly once per database.

use crate::db::log::{AuditOp, migration_logged, ttlog};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Ensure that the `records` table exists.
///
/// Column layout matches databases written by earlier clock tools, so an
/// existing `~/.clock/clock.db` is picked up as-is.
fn ensure_records_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id       INTEGER NOT NULL PRIMARY KEY,
            time     TEXT,
            action   TEXT,
            category TEXT
        );
        "#,
    )
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: "20250301_0001_records_category_index",
    description: "Added category index to records table",
    sql: "CREATE INDEX IF NOT EXISTS idx_records_category ON records(category);",
}];

fn apply(conn: &Connection, m: &Migration) -> AppResult<bool> {
    if migration_logged(conn, m.version)? {
        return Ok(false);
    }

    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    ttlog(conn, AuditOp::MigrationApplied, m.version, m.description)?;

    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() on every startup. Returns the versions applied
/// by this call, empty when the schema was already current.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;
    ensure_records_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if apply(conn, m)? {
            applied.push(m.version);
        }
    }

    Ok(applied)
}
