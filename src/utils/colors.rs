/// ANSI color helper utilities for terminal output.
use crate::models::{Priority, Status};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Completed → green, In Progress → yellow, Pending → blue.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Completed => GREEN,
        Status::InProgress => YELLOW,
        Status::Pending => BLUE,
    }
}

pub fn color_for_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => GREY,
    }
}

/// Empty text fields are shown as a grey dash.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
