//! Export of complete reading sessions to CSV or JSON.

use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::time::format_local;
use clap::ValueEnum;
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::Path;

const CSV_HEADER: [&str; 8] = [
    "key",
    "book_name",
    "start",
    "end",
    "start_page",
    "end_page",
    "minutes",
    "pages",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row written for each session.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LogExport {
    pub key: String,
    pub book_name: String,
    pub start: String,
    pub end: String,
    pub start_page: i64,
    pub end_page: i64,
    pub minutes: i64,
    pub pages: i64,
}

impl LogExport {
    pub fn from_entry(entry: &LogEntry) -> Option<Self> {
        let (start, end, start_page, end_page) = entry.bounds()?;
        Some(Self {
            key: entry.key(),
            book_name: entry.book_name.clone(),
            start: format_local(start, "%Y-%m-%d %H:%M:%S"),
            end: format_local(end, "%Y-%m-%d %H:%M:%S"),
            start_page,
            end_page,
            minutes: entry.minutes().unwrap_or(0),
            pages: entry.pages().unwrap_or(0),
        })
    }
}

/// Write the complete entries to `path`. An existing file is only replaced
/// with `force` or after confirmation.
pub fn export_entries(
    entries: &[LogEntry],
    format: ExportFormat,
    path: &Path,
    force: bool,
    assume_yes: bool,
) -> AppResult<usize> {
    ensure_writable(path, force, assume_yes)?;

    let rows: Vec<LogExport> = entries.iter().filter_map(LogExport::from_entry).collect();

    match format {
        ExportFormat::Csv => write_csv(path, &rows)?,
        ExportFormat::Json => write_json(path, &rows)?,
    }

    success(format!(
        "{} export completed: {} sessions to {}",
        format.as_str(),
        rows.len(),
        path.display()
    ));
    Ok(rows.len())
}

fn ensure_writable(path: &Path, force: bool, assume_yes: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let prompt = format!("The file '{}' already exists. Overwrite?", path.display());
    if ask_confirmation(&prompt, assume_yes) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Aborted(
            "export cancelled, existing file not overwritten".into(),
        ))
    }
}

fn write_csv(path: &Path, rows: &[LogExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    // serialize() only emits the header along with the first row
    if rows.is_empty() {
        wtr.write_record(CSV_HEADER)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(path: &Path, rows: &[LogExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
