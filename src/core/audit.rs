//! Pretty-printer for the internal `log` (audit) table.

use crate::db::log::AuditOp;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::pad_right;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 40;

/// ANSI colour for an audit operation; unknown operations stay white.
pub fn color_for_operation(op: Option<AuditOp>) -> Colour {
    match op {
        Some(AuditOp::ClockIn) => Colour::Green,
        Some(AuditOp::ClockOut) => Colour::Red,
        Some(AuditOp::Vacuum) => Colour::Blue,
        Some(AuditOp::MigrationApplied) => Colour::Purple,
        Some(AuditOp::Init) => Colour::RGB(255, 153, 51),
        None => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl AuditEntry {
    pub fn op(&self) -> Option<AuditOp> {
        AuditOp::from_db_str(&self.operation)
    }
}

pub struct AuditLogic;

impl AuditLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<AuditEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(AuditEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_audit(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let op_target = Self::op_target(e);
            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                e.id,
                e.date,
                pad_right(&op_target, OP_MAX_WIDTH),
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }

    /// `operation (target)` with the operation coloured, truncated to
    /// OP_MAX_WIDTH visible characters.
    fn op_target(e: &AuditEntry) -> String {
        let color = color_for_operation(e.op());

        let plain = if e.target.is_empty() {
            e.operation.clone()
        } else {
            format!("{} ({})", e.operation, e.target)
        };

        let truncated = if plain.chars().count() > OP_MAX_WIDTH {
            let mut s = plain.chars().take(OP_MAX_WIDTH - 3).collect::<String>();
            s.push_str("...");
            s
        } else {
            plain
        };

        match truncated.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(truncated.as_str()).to_string(),
        }
    }
}
