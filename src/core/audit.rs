use crate::db::log::AuditRow;
use ansi_term::Colour;
use regex::Regex;

const MAX_TARGET_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI color of an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "start" | "view" => Colour::Green,
        "complete" => Colour::Cyan,
        "del" | "clear" => Colour::Red,
        "edit" => Colour::Yellow,
        "sync" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Render the audit trail, one line per row:
/// `  3: 2024-01-01T10:00:00+01:00 | complete (1704099600) => ...`
pub fn render_audit(rows: &[AuditRow]) -> Vec<String> {
    let id_w = rows
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

    let op_target: Vec<String> = rows
        .iter()
        .map(|r| {
            let painted = color_for_operation(&r.operation)
                .paint(r.operation.as_str())
                .to_string();
            if r.target.is_empty() {
                painted
            } else {
                let target: String = if r.target.chars().count() > MAX_TARGET_WIDTH {
                    let mut t: String = r.target.chars().take(MAX_TARGET_WIDTH - 3).collect();
                    t.push_str("...");
                    t
                } else {
                    r.target.clone()
                };
                format!("{} ({})", painted, target)
            }
        })
        .collect();

    let op_w = op_target
        .iter()
        .map(|s| strip_ansi(s).chars().count())
        .max()
        .unwrap_or(10);

    rows.iter()
        .zip(op_target)
        .map(|(row, ot)| {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ot).chars().count()));
            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                row.date,
                ot,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            )
        })
        .collect()
}
