/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Ongoing periods are highlighted in green, closed ones use the default.
pub fn color_for_end(ongoing: bool) -> &'static str {
    if ongoing { GREEN } else { RESET }
}

/// Grey out the "Less than a month" label and empty fields.
pub fn colorize_label(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" || value == crate::core::LESS_THAN_A_MONTH {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
