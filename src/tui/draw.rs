use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::activity::segment_widths;
use crate::model::MonthlySummary;
use crate::util::{language_color, WEEKDAY_COLORS};

pub fn weekday_style(day: usize) -> Style {
    Style::default().fg(Color::Indexed(WEEKDAY_COLORS[day % WEEKDAY_COLORS.len()]))
}

pub fn language_style(language: &str) -> Style {
    Style::default().fg(Color::Indexed(language_color(language)))
}

pub fn title_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

pub fn accent_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// One stacked bar row: month label, seven weekday segments, and the month total.
pub fn stacked_bar_line(summary: &MonthlySummary, max: u64, width: usize) -> Line<'static> {
    let widths = segment_widths(summary, max, width);
    let mut spans = vec![Span::styled(
        format!("{:<4}", summary.month.abbrev()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (day, w) in widths.iter().enumerate() {
        if *w > 0 {
            spans.push(Span::styled("█".repeat(*w), weekday_style(day)));
        }
    }
    let used: usize = widths.iter().sum();
    spans.push(Span::raw(" ".repeat(width.saturating_sub(used) + 1)));
    spans.push(Span::styled(
        format!("{:>5}", summary.commits),
        Style::default().fg(Color::White),
    ));
    Line::from(spans)
}
