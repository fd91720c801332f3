use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fmt;

/// Upper bound on the length of a plan, about a century.
const MAX_PLAN_DAYS: i128 = 36_600;

/// Pages scheduled for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDay {
    pub day: NaiveDate,
    pub first_page: i64,
    pub last_page: i64,
}

impl fmt::Display for PlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.day.format("%Y-%m-%d"),
            self.first_page,
            self.last_page
        )
    }
}

/// Split `start_page..=end_page` into consecutive days of `per_day` pages
/// starting on `first_day`. The last day is capped at `end_page`.
pub fn build_plan(
    first_day: NaiveDate,
    start_page: i64,
    end_page: i64,
    per_day: i64,
) -> AppResult<Vec<PlanDay>> {
    if per_day < 1 {
        return Err(AppError::InvalidInput(format!(
            "pages per day must be positive, got {}",
            per_day
        )));
    }

    if start_page > end_page {
        return Ok(Vec::new());
    }

    let span = i128::from(end_page) - i128::from(start_page) + 1;
    let days = (span + i128::from(per_day) - 1) / i128::from(per_day);
    if days > MAX_PLAN_DAYS {
        return Err(AppError::InvalidInput(format!(
            "a plan from page {} to {} at {} pages per day spans {} days, limit is {}",
            start_page, end_page, per_day, days, MAX_PLAN_DAYS
        )));
    }

    let mut plan = Vec::new();
    let mut day = first_day;
    let mut first = start_page;

    loop {
        let last = first.saturating_add(per_day - 1).min(end_page);
        plan.push(PlanDay {
            day,
            first_page: first,
            last_page: last,
        });

        if last >= end_page {
            break;
        }
        first = last + 1;
        day = day
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDate(format!("plan runs past {}", day)))?;
    }

    Ok(plan)
}
