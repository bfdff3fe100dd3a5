use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )])
}

/// Draw the modal help overlay describing navigation, views, and shortcuts.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(70, 80, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "ghscope - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        section("Query:"),
        Line::from("  u / s       Enter a GitHub username (Enter to fetch)"),
        Line::from("  r           Reload the current user"),
        Line::from(""),
        section("Views:"),
        Line::from("  Tab         Next view (Profile/Repositories/Activity)"),
        Line::from("  Shift+Tab   Previous view"),
        Line::from("  1 / 2 / 3   Jump to a view"),
        Line::from(""),
        section("Repositories & Activity:"),
        Line::from("  j/k or ↑/↓  Move selection"),
        Line::from("  [ / ]       Previous / next repository"),
        Line::from("  g/G         Jump to first/last"),
        Line::from("  PgUp/PgDn   Move by 10 items"),
        Line::from("  /           Filter by name, description, or topic"),
        Line::from("  Enter       Show commit activity for the selection"),
        Line::from("  c           Copy repository URL"),
        Line::from(""),
        section("General:"),
        Line::from("  h, F1       Toggle this help"),
        Line::from("  Esc         Cancel input / close help"),
        Line::from("  q           Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
