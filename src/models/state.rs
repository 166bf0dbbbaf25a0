//! Clock state derived from the tail of the record log.

use super::event::Event;

/// State of the single process-wide timeline.
///
/// Categories only label the open session; they never run in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState<'a> {
    /// No record has ever been written.
    Never,
    /// The latest record is a clock-in.
    Open(&'a Event),
    /// The latest record is a clock-out.
    Closed(&'a Event),
}

impl<'a> ClockState<'a> {
    pub fn last_event(&self) -> Option<&'a Event> {
        match self {
            ClockState::Never => None,
            ClockState::Open(ev) | ClockState::Closed(ev) => Some(ev),
        }
    }
}

/// Derive the current state from recent events, newest first.
///
/// Always computed from fresh rows, never cached between decisions.
pub fn derive_state(recent: &[Event]) -> ClockState<'_> {
    match recent.first() {
        None => ClockState::Never,
        Some(ev) if ev.action.is_in() => ClockState::Open(ev),
        Some(ev) => ClockState::Closed(ev),
    }
}
