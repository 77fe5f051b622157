//! ANSI color helper utilities for terminal output.
use crate::models::EmailStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Email status color:
/// Found → green, Not Met → yellow, Pending → cyan, None → grey
pub fn color_for_status(status: EmailStatus) -> &'static str {
    match status {
        EmailStatus::Found => GREEN,
        EmailStatus::NotMet => YELLOW,
        EmailStatus::Pending => CYAN,
        EmailStatus::None => GREY,
    }
}

/// Returns formatted text with GREY when the value is empty.
///
/// Esempio:
/// `colorize_optional("")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_status(status: EmailStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
