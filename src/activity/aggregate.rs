use chrono::{Datelike, TimeZone};
use tracing::warn;

use crate::model::{Month, MonthlySummary, WeekActivity};

/// Month name of a week-start timestamp as seen in `tz`.
pub fn month_of<Tz: TimeZone>(week_start: i64, tz: &Tz) -> Option<Month> {
    let date = tz.timestamp_opt(week_start, 0).earliest()?;
    Month::from_index0(date.month0())
}

/// Folds weekly activity into one summary per month name.
///
/// Records appear in the order their month is first seen in `weeks`. The key
/// is the month name alone, so the same month of different years shares a
/// record. Missing `days` entries count as zero.
pub fn aggregate_monthly<Tz: TimeZone>(weeks: &[WeekActivity], tz: &Tz) -> Vec<MonthlySummary> {
    let mut months: Vec<MonthlySummary> = Vec::with_capacity(12);

    for week in weeks {
        let Some(month) = month_of(week.week, tz) else {
            warn!(week = week.week, "skipping week with out-of-range timestamp");
            continue;
        };

        match months.iter_mut().find(|m| m.month == month) {
            Some(summary) => summary.add_week(week),
            None => {
                let mut summary = MonthlySummary::new(month);
                summary.add_week(week);
                months.push(summary);
            }
        }
    }

    months
}
