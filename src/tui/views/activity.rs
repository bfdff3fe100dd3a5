use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::super::draw::{stacked_bar_line, title_style, weekday_style};
use super::super::layout::get_visible_repos;
use super::super::state::TuiState;
use crate::activity::max_weekday_sum;
use crate::activity::output::EMPTY_ACTIVITY;
use crate::model::WEEKDAY_NAMES;

/// Render the repository picker and the monthly stacked commit chart.
pub fn draw_activity_view(f: &mut Frame, area: Rect, state: &TuiState) {
    if state.profile.is_none() {
        f.render_widget(
            Paragraph::new("No profile loaded")
                .block(Block::default().title("Commit Activity").borders(Borders::ALL)),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    let picker_lines: Vec<Line> = get_visible_repos(state.repos(), state, chunks[0].height.saturating_sub(2) as usize)
        .into_iter()
        .map(|(repo, is_selected)| {
            if is_selected {
                Line::from(Span::styled(format!("▶ {}", repo.name), title_style()))
            } else {
                Line::from(format!("  {}", repo.name))
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(picker_lines).block(Block::default().title("Repository").borders(Borders::ALL)),
        chunks[0],
    );

    let title = match state.activity.repo.as_deref() {
        Some(repo) => format!("Commit Activity - {repo}"),
        None => "Commit Activity".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    if let Some(error) = &state.activity.error {
        let color = if state.activity.not_found { Color::Yellow } else { Color::Red };
        let alert = Paragraph::new(Line::from(Span::styled(
            format!("⚠ {error}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
        f.render_widget(alert, Rect { height: inner.height.min(4), ..inner });
        return;
    }

    if state.activity.repo.is_none() {
        f.render_widget(
            Paragraph::new("Select a repository with j/k or [ ]").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let months = &state.activity.months;
    if months.is_empty() {
        f.render_widget(
            Paragraph::new(EMPTY_ACTIVITY)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let max = max_weekday_sum(months);
    // Month label and total sit on either side of the bar.
    let bar_width = (parts[0].width as usize).saturating_sub(11).max(1);
    let mut lines = vec![Line::from(Span::styled(
        "Monthly commit history for selected repository",
        Style::default().fg(Color::DarkGray),
    ))];
    lines.extend(months.iter().map(|m| stacked_bar_line(m, max, bar_width)));
    f.render_widget(Paragraph::new(lines), parts[0]);

    let mut legend = Vec::new();
    for (day, name) in WEEKDAY_NAMES.iter().enumerate() {
        legend.push(Span::styled("● ", weekday_style(day)));
        legend.push(Span::raw(format!("{name}  ")));
    }
    f.render_widget(Paragraph::new(Line::from(legend)).alignment(Alignment::Center), parts[1]);
}
