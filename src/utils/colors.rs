/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Progress color for the daily task: green once the quota is reached.
pub fn color_for_progress(done: i64, quota: i64) -> &'static str {
    if done >= quota {
        GREEN
    } else if done > 0 {
        YELLOW
    } else {
        RED
    }
}
