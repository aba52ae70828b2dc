/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Color of a gap by its position in the window:
/// start → yellow, middle → red, end → cyan
pub fn color_for_gap_kind(kind: crate::models::coverage::GapKind) -> &'static str {
    use crate::models::coverage::GapKind;
    match kind {
        GapKind::Start => YELLOW,
        GapKind::Middle => RED,
        GapKind::End => CYAN,
    }
}

/// Highlight color: red when the day has gaps, green otherwise.
pub fn color_for_highlight(highlight: bool) -> &'static str {
    if highlight { RED } else { GREEN }
}

/// Grey out empty values ("" or "--:--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
