use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::recent_events;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::utils::colors::{colorize_action, colorize_optional};
use crate::utils::table::Table;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool, n: usize, cfg: &Config) -> AppResult<()> {
        let events = recent_events(&pool.conn, n)?;
        print!("{}", Self::render(events, cfg.separator()));
        Ok(())
    }

    /// Render `events` (newest first) as a chronological table.
    pub fn render(mut events: Vec<Event>, separator: char) -> String {
        events.reverse();

        let mut table =
            Table::new(&["ID", "Action", "Category", "Time"]).with_separator(separator);
        for ev in &events {
            table.add_row(vec![
                format!("{}:", ev.id),
                colorize_action(ev.action),
                colorize_optional(ev.category.as_str()),
                ev.time_str(),
            ]);
        }

        table.render()
    }
}
