use super::{action::ClockAction, category::Category};
use crate::utils::time::STORE_TIME_FORMAT;
use chrono::NaiveDateTime;

/// One row of the `records` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,             // ⇔ records.id (INTEGER PRIMARY KEY)
    pub time: NaiveDateTime, // ⇔ records.time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub action: ClockAction, // ⇔ records.action ('in' | 'out')
    pub category: Category,  // ⇔ records.category (TEXT, never empty)
}

impl Event {
    pub fn time_str(&self) -> String {
        self.time.format(STORE_TIME_FORMAT).to_string()
    }
}
