use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use super::super::draw::title_style;
use super::super::state::{InputMode, Tab, TuiState};

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Username entry box, highlighted while it has focus.
pub fn draw_search_bar(f: &mut Frame, area: Rect, state: &TuiState) {
    let editing = state.input_mode == InputMode::Username;
    let text = if state.username_input.is_empty() && !editing {
        Span::styled("Press u to enter a GitHub username", Style::default().fg(Color::DarkGray))
    } else if editing {
        Span::raw(format!("{}_", state.username_input))
    } else {
        Span::raw(state.username_input.clone())
    };
    let border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let bar = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title("GitHub username")
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(bar, area);
}

pub fn draw_tabs(f: &mut Frame, area: Rect, state: &TuiState) {
    let titles = vec![
        "Profile".to_string(),
        format!("Repositories ({})", state.repos().len()),
        "Commit Activity".to_string(),
    ];
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("ghscope"))
        .highlight_style(title_style())
        .select(state.tab.index());
    f.render_widget(tabs, area);
}

/// Bottom line: loading indicator, query error, transient status, or key hints.
pub fn draw_status_line(f: &mut Frame, area: Rect, state: &TuiState) {
    let line = if let Some(loading) = &state.loading {
        Line::from(Span::styled(loading.clone(), Style::default().fg(Color::Cyan)))
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(
            format!("✖ {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = state
        .status_message
        .as_ref()
        .filter(|(_, at)| at.elapsed() < STATUS_TTL)
        .map(|(message, _)| message)
    {
        Line::from(Span::styled(message.clone(), Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled(hint(state), Style::default().fg(Color::DarkGray)))
    };
    f.render_widget(Paragraph::new(line), area);
}

fn hint(state: &TuiState) -> &'static str {
    match (state.input_mode, state.tab) {
        (InputMode::Username, _) => "Enter fetch · Esc cancel",
        (InputMode::Filter, _) => "Type to filter · Enter keep · Esc clear",
        (_, Tab::Profile) => "u username · Tab switch view · h help · q quit",
        (_, Tab::Repositories) => "/ filter · j/k move · Enter activity · c copy URL · h help",
        (_, Tab::Activity) => "[/] previous/next repository · c copy URL · h help",
    }
}
