use chrono::NaiveDate;
use serde::Serialize;

/// Reading totals of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub minutes: i64,
    pub pages: i64,
}
