use crate::utils::time::{format_local, hms};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One reading session.
///
/// The store key is always `start_time` as a decimal string, see [`LogEntry::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub book_name: String,
    pub start_time: i64,
    #[serde(default)]
    pub end_time: Option<i64>,
    pub start_page: i64,
    #[serde(default)]
    pub end_page: Option<i64>,
    #[serde(default)]
    pub complete: bool,
}

impl LogEntry {
    /// A session that has started but whose end is not known yet.
    pub fn temporary(book_name: &str, start_time: i64, start_page: i64) -> Self {
        Self {
            book_name: book_name.to_string(),
            start_time,
            end_time: None,
            start_page,
            end_page: None,
            complete: false,
        }
    }

    pub fn completed(
        book_name: &str,
        start_time: i64,
        end_time: i64,
        start_page: i64,
        end_page: i64,
    ) -> Self {
        Self {
            book_name: book_name.to_string(),
            start_time,
            end_time: Some(end_time),
            start_page,
            end_page: Some(end_page),
            complete: true,
        }
    }

    pub fn key(&self) -> String {
        key_for(self.start_time)
    }

    pub fn is_temporary(&self) -> bool {
        !self.complete
    }

    /// Session length in whole minutes, when the end is known.
    pub fn minutes(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).div_euclid(60))
    }

    /// Pages read, when the end page is known.
    pub fn pages(&self) -> Option<i64> {
        self.end_page.map(|end| end - self.start_page)
    }

    /// `(start_time, end_time, start_page, end_page)` of a finished session.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        Some((
            self.start_time,
            self.end_time?,
            self.start_page,
            self.end_page?,
        ))
    }

    /// One-line listing form:
    /// `[2024-01-01 10:00] - [2024-01-01 10:30] ( 30 mins): 1-11 (10 pages)`
    pub fn detail(&self) -> String {
        let start = format_local(self.start_time, "%Y-%m-%d %H:%M");
        let end = self
            .end_time
            .map(|t| format_local(t, "%Y-%m-%d %H:%M"))
            .unwrap_or_else(|| "----------------".to_string());

        format!(
            "[{}] - [{}] ({:>3} mins): {}-{} ({:>2} pages)",
            start,
            end,
            opt(self.minutes()),
            self.start_page,
            opt(self.end_page),
            opt(self.pages()),
        )
    }
}

/// Display form used for temporary entries, close to the viewer session
/// output: start stamp, elapsed time and page range on the first line.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = format_local(self.start_time, "%Y-%m-%d %H:%M:%S");
        let elapsed = self
            .end_time
            .map(|end| hms(end - self.start_time))
            .unwrap_or_else(|| "?".to_string());

        write!(
            f,
            "{} (time: {}, page: {}-{})",
            start,
            elapsed,
            self.start_page,
            opt(self.end_page)
        )?;

        if let Some(end) = self.end_time {
            write!(f, "\n{}", format_local(end, "%Y-%m-%d %H:%M:%S"))?;
        }
        Ok(())
    }
}

pub fn key_for(start_time: i64) -> String {
    start_time.to_string()
}

fn opt(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string())
}
