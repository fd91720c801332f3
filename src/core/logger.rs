//! Reading-log lifecycle on top of the record store.
//!
//! An entry is TEMPORARY while the session is open (no end page yet) and
//! becomes COMPLETE once both page bounds and both times are known. The
//! transition is one-way. Every mutating method commits before returning.

use crate::db::Recorder;
use crate::errors::{AppError, AppResult};
use crate::models::{DaySummary, LogEntry};
use crate::utils::time::day_in;
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;
use std::path::Path;

pub struct Logger {
    store: Recorder<LogEntry>,
}

impl Logger {
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        Ok(Self {
            store: Recorder::open(path)?,
        })
    }

    pub fn close(&mut self) -> AppResult<()> {
        self.store.close()
    }

    pub fn store(&self) -> &Recorder<LogEntry> {
        &self.store
    }

    pub fn get(&self, key: &str) -> AppResult<Option<LogEntry>> {
        self.store.get(key)
    }

    fn insert_new(&mut self, entry: &LogEntry, operation: &str) -> AppResult<String> {
        let key = entry.key();
        if self.store.contains(&key)? {
            return Err(AppError::DuplicateKey(key));
        }

        self.store.set(&key, entry)?;
        self.store.audit(operation, &key, &entry.detail());
        self.store.commit()?;
        Ok(key)
    }

    /// Open a session: a TEMPORARY entry keyed by `start_time`.
    pub fn start_session(
        &mut self,
        book_name: &str,
        start_time: i64,
        start_page: i64,
    ) -> AppResult<String> {
        let entry = LogEntry::temporary(book_name, start_time, start_page);
        self.insert_new(&entry, "start")
    }

    /// Store the outcome of a finished viewing. Without an end page the
    /// entry stays TEMPORARY and has to be completed later.
    pub fn record_viewed(
        &mut self,
        book_name: &str,
        start_time: i64,
        end_time: i64,
        start_page: i64,
        end_page: Option<i64>,
    ) -> AppResult<LogEntry> {
        check_times(start_time, end_time)?;

        let mut entry = LogEntry::temporary(book_name, start_time, start_page);
        entry.end_time = Some(end_time);
        entry.end_page = end_page;
        entry.complete = end_page.is_some();

        self.insert_new(&entry, "view")?;
        Ok(entry)
    }

    /// Insert a fully specified session directly as COMPLETE.
    pub fn add_complete(
        &mut self,
        book_name: &str,
        start_time: i64,
        end_time: i64,
        start_page: i64,
        end_page: i64,
    ) -> AppResult<String> {
        check_times(start_time, end_time)?;

        let entry = LogEntry::completed(book_name, start_time, end_time, start_page, end_page);
        self.insert_new(&entry, "add")
    }

    /// Promote the TEMPORARY entry at `key` to COMPLETE, in place.
    pub fn complete_session(
        &mut self,
        key: &str,
        end_time: i64,
        end_page: i64,
    ) -> AppResult<LogEntry> {
        let mut entry = match self.store.get(key)? {
            Some(e) if e.is_temporary() => e,
            _ => {
                return Err(AppError::NotFound(format!(
                    "no temporary log entry with key {}",
                    key
                )));
            }
        };

        check_times(entry.start_time, end_time)?;

        entry.end_time = Some(end_time);
        entry.end_page = Some(end_page);
        entry.complete = true;

        self.store.set(key, &entry)?;
        self.store.audit("complete", key, &entry.detail());
        self.store.commit()?;
        Ok(entry)
    }

    fn sorted_where<F>(&self, predicate: F) -> AppResult<Vec<LogEntry>>
    where
        F: Fn(&LogEntry) -> bool,
    {
        let mut entries: Vec<LogEntry> = self
            .store
            .list_all(|_, e| predicate(e))?
            .into_iter()
            .map(|(_, e)| e)
            .collect();
        entries.sort_by_key(|e| e.start_time);
        Ok(entries)
    }

    /// TEMPORARY entries, oldest first.
    pub fn list_temporary(&self) -> AppResult<Vec<LogEntry>> {
        self.sorted_where(LogEntry::is_temporary)
    }

    /// COMPLETE entries, oldest first.
    pub fn list_complete(&self) -> AppResult<Vec<LogEntry>> {
        self.sorted_where(|e| e.complete)
    }

    /// COMPLETE entries that started within `[from, to]` (unix seconds).
    pub fn complete_between(&self, from: i64, to: i64) -> AppResult<Vec<LogEntry>> {
        self.sorted_where(|e| e.complete && (from..=to).contains(&e.start_time))
    }

    pub fn latest_temporary(&self) -> AppResult<Option<LogEntry>> {
        Ok(self.list_temporary()?.pop())
    }

    pub fn last_complete(&self) -> AppResult<Option<LogEntry>> {
        Ok(self.list_complete()?.pop())
    }

    /// Delete every TEMPORARY entry. Returns how many were removed.
    pub fn clear_temporary(&mut self) -> AppResult<usize> {
        let keys: Vec<String> = self
            .store
            .list_all(|_, e| e.is_temporary())?
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        for key in &keys {
            self.store.delete(key)?;
        }

        if !keys.is_empty() {
            self.store.audit(
                "clear",
                "",
                &format!("{} temporary entries removed", keys.len()),
            );
        }
        self.store.commit()?;
        Ok(keys.len())
    }

    /// Delete the COMPLETE entry with the greatest `start_time`.
    /// Returns the removed entry, or `None` when there was nothing to delete.
    pub fn delete_last_complete(&mut self) -> AppResult<Option<LogEntry>> {
        let Some(last) = self.last_complete()? else {
            return Ok(None);
        };

        let key = last.key();
        self.store.delete(&key)?;
        self.store.audit("del", &key, &last.detail());
        self.store.commit()?;
        Ok(Some(last))
    }

    /// Page to resume from: end page of the latest complete session, or 1.
    pub fn next_start_page(&self) -> AppResult<i64> {
        Ok(self
            .last_complete()?
            .and_then(|e| e.end_page)
            .unwrap_or(1))
    }

    /// Per-day totals of COMPLETE entries, grouped by local calendar day.
    pub fn summarize_by_day(&self) -> AppResult<Vec<DaySummary>> {
        self.summarize_by_day_in(&Local)
    }

    /// Same as [`Logger::summarize_by_day`] in an explicit timezone.
    pub fn summarize_by_day_in<Tz: TimeZone>(&self, tz: &Tz) -> AppResult<Vec<DaySummary>> {
        let mut days: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();

        for entry in self.list_complete()? {
            let Some(day) = day_in(entry.start_time, tz) else {
                continue;
            };
            let totals = days.entry(day).or_default();
            totals.0 += entry.minutes().unwrap_or(0);
            totals.1 += entry.pages().unwrap_or(0);
        }

        Ok(days
            .into_iter()
            .map(|(day, (minutes, pages))| DaySummary {
                day,
                minutes,
                pages,
            })
            .collect())
    }
}

fn check_times(start_time: i64, end_time: i64) -> AppResult<()> {
    if end_time < start_time {
        return Err(AppError::InvalidInput(format!(
            "end time {} is before start time {}",
            end_time, start_time
        )));
    }
    Ok(())
}
