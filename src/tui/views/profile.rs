use chrono::Utc;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::super::draw::{accent_style, title_style};
use super::super::state::TuiState;
use crate::profile::{badges, details};

/// Render the profile card: avatar initials, names, bio, counters, and details.
pub fn draw_profile_view(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(profile) = state.profile.as_ref() else {
        let text = if state.error.is_some() {
            "No profile loaded"
        } else {
            "Enter a GitHub username to get started (press u)"
        };
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().title("Profile").borders(Borders::ALL)),
            area,
        );
        return;
    };
    let user = &profile.user;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area);

    let avatar = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            user.initials(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Indexed(37))
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(avatar, chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(user.display_name().to_string(), title_style())),
        Line::from(vec![
            Span::styled(format!("@{}", user.login), accent_style()),
            Span::raw("  "),
            Span::styled(user.html_url.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];
    if let Some(bio) = user.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        lines.push(Line::from(bio.to_string()));
        lines.push(Line::from(""));
    }

    let mut badge_spans = Vec::new();
    for badge in badges(user) {
        badge_spans.push(Span::styled(
            format!(" {badge} "),
            Style::default().fg(Color::Indexed(43)).bg(Color::Indexed(236)),
        ));
        badge_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(badge_spans));
    lines.push(Line::from(""));

    for (label, value) in details(user, &Utc::now()) {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<9}"), Style::default().fg(Color::Indexed(37))),
            Span::raw(value),
        ]));
    }

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Profile").borders(Borders::ALL));
    f.render_widget(card, chunks[1]);
}
