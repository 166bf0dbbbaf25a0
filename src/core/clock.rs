//! The clock state machine: validate an in/out request against the latest
//! record and append it when legal.

use crate::db::pool::DbPool;
use crate::db::queries::{append_event, recent_events};
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::category::Category;
use crate::models::state::{ClockState, derive_state};
use rusqlite::TransactionBehavior;

/// Decide whether `action` may follow `state`.
///
/// Returns the category to record: the requested one, `"default"` when a
/// clock-in names none, or the open session's category when a clock-out
/// names none.
pub fn decide(state: ClockState<'_>, action: ClockAction, requested: &str) -> AppResult<Category> {
    match (state, action) {
        (ClockState::Never, ClockAction::In) | (ClockState::Closed(_), ClockAction::In) => {
            Ok(Category::or_default(requested))
        }

        (ClockState::Never, ClockAction::Out) => Err(AppError::InvalidTransition(
            "cannot clock out without clocking in first".to_string(),
        )),

        (ClockState::Open(prev), ClockAction::In) => Err(AppError::InvalidTransition(format!(
            "already clocked in ({} @ {})",
            prev.category,
            prev.time_str()
        ))),

        (ClockState::Closed(prev), ClockAction::Out) => Err(AppError::InvalidTransition(format!(
            "already clocked out ({} @ {})",
            prev.category,
            prev.time_str()
        ))),

        (ClockState::Open(prev), ClockAction::Out) => {
            let category = Category::or_inherit(requested, &prev.category);
            if category != prev.category {
                return Err(AppError::InvalidTransition(format!(
                    "cannot clock out of a different category ({})",
                    prev.category
                )));
            }
            Ok(category)
        }
    }
}

/// High-level business logic for the `in` / `out` commands.
pub struct ClockLogic;

impl ClockLogic {
    /// Read the latest record, validate the transition and append it.
    ///
    /// Read and write share one IMMEDIATE transaction, so a second process
    /// cannot slip a record in between.
    pub fn clock_in_out(
        pool: &mut DbPool,
        action: ClockAction,
        requested: &str,
    ) -> AppResult<Category> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let recent = recent_events(&tx, 1)?;
        let category = decide(derive_state(&recent), action, requested)?;
        append_event(&tx, action, &category)?;

        tx.commit()?;
        Ok(category)
    }
}
