pub mod aggregate;
pub mod chart;
pub mod exec;
pub mod output;

pub use aggregate::{aggregate_monthly, month_of};
pub use chart::{max_weekday_sum, segment_widths};
pub use exec::{exec, select_repository};
pub use output::{output_chart, output_json, output_ndjson};

use chrono::{Local, Utc};

use crate::model::{MonthlySummary, WeekActivity};

/// Timezone used to turn week-start timestamps into calendar months.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Local,
    Utc,
}

impl Zone {
    pub fn aggregate(self, weeks: &[WeekActivity]) -> Vec<MonthlySummary> {
        match self {
            Zone::Local => aggregate_monthly(weeks, &Local),
            Zone::Utc => aggregate_monthly(weeks, &Utc),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Local => "local",
            Zone::Utc => "UTC",
        }
    }
}
