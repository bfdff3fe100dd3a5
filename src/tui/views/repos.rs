use chrono::Utc;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use super::super::draw::{accent_style, language_style, title_style};
use super::super::layout::get_visible_repos;
use super::super::state::{InputMode, TuiState};
use super::header_cell;
use crate::repos::EMPTY_FILTER;
use crate::util::{relative_time, truncate};

/// Render the repository table with a detail panel for the selection.
pub fn draw_repos_view(f: &mut Frame, area: Rect, state: &TuiState) {
    let title = if state.input_mode == InputMode::Filter {
        format!("Repositories - filter: {}_", state.filter_query)
    } else if !state.filter_query.is_empty() {
        format!("Repositories - filter: {} ({} matches)", state.filter_query, state.filtered_indices.len())
    } else {
        "Repositories".to_string()
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if state.profile.is_none() {
        f.render_widget(Paragraph::new("No profile loaded").block(block), area);
        return;
    }
    if state.filtered_indices.is_empty() {
        f.render_widget(
            Paragraph::new(EMPTY_FILTER).alignment(Alignment::Center).block(block),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let now = Utc::now();
    let visible = get_visible_repos(state.repos(), state, chunks[0].height.saturating_sub(3) as usize);
    let rows: Vec<Row> = visible
        .iter()
        .map(|(repo, is_selected)| {
            let name_cell = if *is_selected {
                Cell::from(format!("{} ◄", repo.name)).style(title_style())
            } else {
                Cell::from(repo.name.clone()).style(Style::default().fg(Color::White))
            };
            let lang_cell = match repo.language.as_deref() {
                Some(lang) => Cell::from(format!("● {lang}")).style(language_style(lang)),
                None => Cell::from(""),
            };
            let updated = repo
                .updated_at
                .map(|t| relative_time(&t, &now))
                .unwrap_or_default();
            Row::new(vec![
                name_cell,
                lang_cell,
                Cell::from(format!("★ {}", repo.stargazers_count)).style(Style::default().fg(Color::Yellow)),
                Cell::from(format!("⑂ {}", repo.forks_count)).style(accent_style()),
                Cell::from(updated).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Min(10),
        ],
    )
    .header(Row::new([
        header_cell("Name", Color::Yellow),
        header_cell("Language", Color::Yellow),
        header_cell("Stars", Color::Yellow),
        header_cell("Forks", Color::Yellow),
        header_cell("Updated", Color::Yellow),
    ]))
    .block(block);
    f.render_widget(table, chunks[0]);

    draw_repo_details(f, chunks[1], state);
}

fn draw_repo_details(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(repo) = state.selected_repo() else {
        f.render_widget(
            Paragraph::new("No repository selected")
                .block(Block::default().title("Details").borders(Borders::ALL)),
            area,
        );
        return;
    };

    let visibility_style = if repo.is_public() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![
        Line::from(Span::styled(repo.name.clone(), title_style())),
        Line::from(Span::styled(format!("[{}]", repo.visibility), visibility_style)),
        Line::from(""),
    ];
    if let Some(desc) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(truncate(desc, 300)));
        lines.push(Line::from(""));
    }
    if !repo.topics.is_empty() {
        let mut spans = Vec::new();
        for topic in &repo.topics {
            spans.push(Span::styled(
                format!(" {topic} "),
                Style::default().fg(Color::Indexed(43)).bg(Color::Indexed(236)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(repo.html_url.clone(), Style::default().fg(Color::DarkGray))));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Details").borders(Borders::ALL)),
        area,
    );
}
