//! Read-side reports: current status and elapsed time between the last two
//! records.

use crate::db::pool::DbPool;
use crate::db::queries::recent_events;
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::category::Category;
use crate::models::event::Event;
use crate::models::state::derive_state;
use crate::utils::formatting::secs2readable;
use crate::utils::time::{STORE_TIME_FORMAT, rounded_secs_between, store_now};
use chrono::NaiveDateTime;
use std::fmt;

/// Span between the two most recent records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub latest: ClockAction,
    pub secs: i64,
}

impl LastSpan {
    /// `recent` must be newest first, as returned by `recent_events`.
    pub fn from_recent(recent: &[Event]) -> AppResult<Self> {
        let [end, start, ..] = recent else {
            return Err(AppError::InsufficientHistory);
        };

        Ok(Self {
            start: start.time,
            end: end.time,
            latest: end.action,
            secs: (end.time - start.time).num_seconds(),
        })
    }
}

impl fmt::Display for LastSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.format(STORE_TIME_FORMAT);
        let end = self.end.format(STORE_TIME_FORMAT);
        match self.latest {
            ClockAction::In => write!(
                f,
                "Last clock in was from {} to {} ({})",
                start,
                end,
                secs2readable(self.secs)
            ),
            ClockAction::Out => write!(
                f,
                "Last clock out was {} ({} ago)",
                end,
                secs2readable(self.secs)
            ),
        }
    }
}

/// Current clock status measured against a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub action: ClockAction,
    pub category: Category,
    pub since: NaiveDateTime,
    pub secs: i64,
}

impl Status {
    pub fn at(recent: &[Event], now: NaiveDateTime) -> AppResult<Self> {
        let latest = derive_state(recent)
            .last_event()
            .ok_or(AppError::NoRecords)?;

        Ok(Self {
            action: latest.action,
            category: latest.category.clone(),
            since: latest.time,
            secs: rounded_secs_between(latest.time, now),
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let since = self.since.format(STORE_TIME_FORMAT);
        match self.action {
            ClockAction::In => write!(
                f,
                "Clocked in ({}) since {} ({} elapsed)",
                self.category,
                since,
                secs2readable(self.secs)
            ),
            ClockAction::Out => write!(
                f,
                "Clocked out ({}) at {} ({} ago)",
                self.category,
                since,
                secs2readable(self.secs)
            ),
        }
    }
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn status(pool: &DbPool) -> AppResult<Status> {
        let recent = recent_events(&pool.conn, 1)?;
        Status::at(&recent, store_now())
    }

    pub fn last_span(pool: &DbPool) -> AppResult<LastSpan> {
        let recent = recent_events(&pool.conn, 2)?;
        LastSpan::from_recent(&recent)
    }
}
