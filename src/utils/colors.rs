/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Streak color:
/// \>=7 → green (top reward tier)
/// \>=3 → yellow (middle tier)
/// \>0 → reset
/// 0 → grey (broken streak)
pub fn color_for_streak(days: u32) -> &'static str {
    if days >= 7 {
        GREEN
    } else if days >= 3 {
        YELLOW
    } else if days > 0 {
        RESET
    } else {
        GREY
    }
}

/// Podium color for leaderboard ranks: 1 → yellow, 2 → cyan, 3 → magenta,
/// everything below → reset.
pub fn color_for_rank(rank: u32) -> &'static str {
    match rank {
        1 => YELLOW,
        2 => CYAN,
        3 => MAGENTA,
        _ => RESET,
    }
}

/// Remove ANSI escape sequences, leaving the visible text.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Grey out empty/placeholder values ("--", empty string), leave the rest
/// untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
