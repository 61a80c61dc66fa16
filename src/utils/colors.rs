/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey placeholder for unset values.
pub fn colorize_optional(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        paint(placeholder, GREY)
    } else {
        value.to_string()
    }
}

/// `Valid` in green or `Invalid` in bold red.
pub fn status_badge(is_valid: bool) -> String {
    if is_valid {
        paint("Valid", GREEN)
    } else {
        format!("{BOLD}{}", paint("Invalid", RED))
    }
}
