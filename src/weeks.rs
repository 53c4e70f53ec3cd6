// Week generator: the dates a best-seller timeline is sampled on.
//
// NYT lists are weekly, so a timeline walks from the start date in
// seven-day steps. Whatever date is requested, the API resolves it to the
// list that was current on that day.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Every seventh day from `start`, strictly before `end`.
///
/// No validation: `start >= end` yields an empty vector.
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut weeks = Vec::new();
    let mut current = start;
    while current < end {
        weeks.push(current);
        current += Duration::days(7);
    }
    weeks
}

/// Parse a `YYYY-MM-DD` date as accepted on the command line.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date {raw:?}, expected YYYY-MM-DD"))
}

/// Format a date the way both remote APIs expect it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
