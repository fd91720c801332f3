//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthChar;

/// First line of `text`, cut to at most `width` terminal columns.
/// A cut is marked with `…`.
pub fn preview(text: &str, width: usize) -> String {
    let line = text.lines().next().unwrap_or("").trim_end();

    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            out.push('…');
            return out;
        }
        used += w;
        out.push(ch);
    }

    if text.lines().nth(1).is_some() {
        out.push_str(" …");
    }
    out
}

pub fn mins2readable(mins: i64) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
