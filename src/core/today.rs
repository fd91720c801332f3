use crate::core::logger::Logger;
use crate::errors::AppResult;
use crate::utils::time::local_day_bounds;
use chrono::NaiveDate;

/// Progress of one day against the daily quota.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayProgress {
    pub spent_secs: i64,
    pub pages_done: i64,
    pub task_start: i64,
    pub task_end: i64,
    pub page_per_day: i64,
}

impl DayProgress {
    pub fn is_done(&self) -> bool {
        self.pages_done >= self.page_per_day
    }
}

/// Sum the complete sessions started on `day` (local time). The day's task
/// starts where the reader stood before the first of those sessions.
pub fn day_progress(logger: &Logger, day: NaiveDate, page_per_day: i64) -> AppResult<DayProgress> {
    let (first, last) = local_day_bounds(day)?;

    let mut spent_secs = 0;
    let mut pages_done = 0;
    for entry in logger.complete_between(first, last)? {
        if let Some((start, end, start_page, end_page)) = entry.bounds() {
            spent_secs += end - start;
            pages_done += end_page - start_page;
        }
    }

    let task_start = logger.next_start_page()? - pages_done;
    Ok(DayProgress {
        spent_secs,
        pages_done,
        task_start,
        task_end: task_start + page_per_day,
        page_per_day,
    })
}
