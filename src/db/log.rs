//! Audit trail: one row in the internal `log` table per state-changing
//! operation (clock in/out, init, vacuum, applied migration).

use crate::errors::AppResult;
use crate::models::action::ClockAction;
use chrono::Local;
use rusqlite::{Connection, params};

/// Operations recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOp {
    ClockIn,
    ClockOut,
    Init,
    Vacuum,
    MigrationApplied,
}

impl AuditOp {
    pub fn to_db_str(self) -> &'static str {
        match self {
            AuditOp::ClockIn => "in",
            AuditOp::ClockOut => "out",
            AuditOp::Init => "init",
            AuditOp::Vacuum => "vacuum",
            AuditOp::MigrationApplied => "migration_applied",
        }
    }

    /// `None` for operations this version does not know.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(AuditOp::ClockIn),
            "out" => Some(AuditOp::ClockOut),
            "init" => Some(AuditOp::Init),
            "vacuum" => Some(AuditOp::Vacuum),
            "migration_applied" => Some(AuditOp::MigrationApplied),
            _ => None,
        }
    }
}

impl From<ClockAction> for AuditOp {
    fn from(action: ClockAction) -> Self {
        match action {
            ClockAction::In => AuditOp::ClockIn,
            ClockAction::Out => AuditOp::ClockOut,
        }
    }
}

/// Append an audit row stamped with the local time (RFC 3339).
pub fn ttlog(conn: &Connection, op: AuditOp, target: &str, message: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        Local::now().to_rfc3339(),
        op.to_db_str(),
        target,
        message
    ])?;

    Ok(())
}

/// Whether `target` already has a `migration_applied` row.
pub fn migration_logged(conn: &Connection, target: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT EXISTS(SELECT 1 FROM log WHERE operation = ?1 AND target = ?2)",
    )?;
    let found: bool =
        stmt.query_row(params![AuditOp::MigrationApplied.to_db_str(), target], |row| {
            row.get(0)
        })?;
    Ok(found)
}
