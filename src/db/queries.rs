//! The `records` event store: append one event, read the most recent ones.

use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::category::Category;
use crate::models::event::Event;
use crate::utils::time::parse_store_time;
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params};

/// Append a new record stamped with the store's current time.
pub fn append_event(conn: &Connection, action: ClockAction, category: &Category) -> AppResult<()> {
    conn.execute(
        "INSERT INTO records (time, action, category) VALUES (datetime('now'), ?1, ?2)",
        params![action.to_db_str(), category.as_str()],
    )?;
    Ok(())
}

/// Up to `n` most recent records, newest first.
pub fn recent_events(conn: &Connection, n: usize) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, time, action, category FROM records
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let limit = i64::try_from(n).unwrap_or(i64::MAX);
    let rows = stmt.query_map([limit], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Event> {
    let time_str: String = row.get("time")?;
    let time = parse_store_time(&time_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    let action_str: String = row.get("action")?;
    let action = ClockAction::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    // Rows are written non-empty; a NULL from a hand-edited DB reads as default.
    let category: Option<String> = row.get("category")?;

    Ok(Event {
        id: row.get("id")?,
        time,
        action,
        category: Category::or_default(category.as_deref().unwrap_or("")),
    })
}
