use chrono::DateTime;

use crate::types::{CommitActivityWeek, DisplaySeries};

/// Weekday abbreviations indexed the way the API indexes `days`, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Select the most recent daily commit counts for display.
///
/// When the last week holds any commits its 7 values are used directly in
/// Sunday-to-Saturday order. Otherwise the scan walks all daily buckets most
/// recent first, keeps the 7 most recent days with a positive count, and
/// restores chronological order. A mid-week fetch leaves the trailing bucket
/// empty while older weeks still hold data, so the fallback may span several
/// weeks of calendar time.
///
/// Returns `None` when no day anywhere has a positive count, including the
/// empty input.
pub fn recent_daily_activity(weeks: &[CommitActivityWeek]) -> Option<DisplaySeries> {
    let last_week = weeks.last()?;
    let last_week_sum: u64 = last_week.days.iter().sum();

    if last_week_sum > 0 {
        let week_start = last_week
            .week
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.date_naive());
        return Some(DisplaySeries {
            labels: DAY_LABELS.to_vec(),
            values: last_week.days.to_vec(),
            week_start,
        });
    }

    // Most recent first: weeks from last to first, days from Saturday back to
    // Sunday within each week.
    let mut recent: Vec<(usize, u64)> = weeks
        .iter()
        .rev()
        .flat_map(|week| {
            week.days
                .iter()
                .enumerate()
                .rev()
                .map(|(day, &count)| (day, count))
        })
        .filter(|&(_, count)| count > 0)
        .take(7)
        .collect();

    if recent.is_empty() {
        return None;
    }
    recent.reverse();

    Some(DisplaySeries {
        labels: recent.iter().map(|&(day, _)| DAY_LABELS[day]).collect(),
        values: recent.iter().map(|&(_, count)| count).collect(),
        week_start: None,
    })
}
