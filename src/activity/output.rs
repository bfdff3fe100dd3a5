use anyhow::Result;
use chrono::Utc;
use console::style;

use super::chart::{max_weekday_sum, segment_widths};
use super::Zone;
use crate::model::{ActivityOutput, MonthlySummary, SCHEMA_VERSION, WEEKDAY_NAMES};
use crate::util::WEEKDAY_COLORS;

const BAR_WIDTH: usize = 40;

pub const EMPTY_ACTIVITY: &str = "No commit data available for this repository";

pub fn output_json(months: &[MonthlySummary], login: &str, repository: &str, zone: Zone) -> Result<()> {
    let output = ActivityOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        login: login.to_string(),
        repository: repository.to_string(),
        timezone: zone.label().to_string(),
        months: months.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(months: &[MonthlySummary]) -> Result<()> {
    for month in months {
        println!("{}", serde_json::to_string(month)?);
    }
    Ok(())
}

pub fn output_chart(months: &[MonthlySummary], repository: &str, zone: Zone) -> Result<()> {
    if months.is_empty() {
        println!("{EMPTY_ACTIVITY}");
        return Ok(());
    }

    println!("{}", style(format!("Commit Activity: {repository}")).bold());
    println!("Monthly commit history ({} months)", zone.label());
    println!("{}", "─".repeat(BAR_WIDTH + 20));

    let max = max_weekday_sum(months);
    for month in months {
        let widths = segment_widths(month, max, BAR_WIDTH);
        let bar: String = widths
            .iter()
            .zip(WEEKDAY_COLORS)
            .map(|(&w, color)| style("█".repeat(w)).color256(color).to_string())
            .collect();
        let used: usize = widths.iter().sum();
        println!(
            "{} {}{} {:>5} commits",
            style(month.month).bold(),
            bar,
            " ".repeat(BAR_WIDTH - used),
            month.commits
        );
    }

    println!("\n{}", style("Legend").bold());
    let legend: Vec<String> = WEEKDAY_NAMES
        .iter()
        .zip(WEEKDAY_COLORS)
        .map(|(day, color)| format!("{} {day}", style("●").color256(color)))
        .collect();
    println!("  {}", legend.join("  "));

    Ok(())
}
