/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::action::ClockAction;

/// `in` in green, `out` in red.
pub fn colorize_action(action: ClockAction) -> String {
    match action {
        ClockAction::In => format!("{GREEN}{action}{RESET}"),
        ClockAction::Out => format!("{RED}{action}{RESET}"),
    }
}

/// Grey out values that carry no information (empty, `--`, `default`).
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" || value.trim() == "default" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
