use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Cell;

mod activity;
mod header;
mod help;
mod profile;
mod repos;

pub use activity::draw_activity_view;
pub use header::{draw_search_bar, draw_status_line, draw_tabs};
pub use help::draw_help_overlay;
pub use profile::draw_profile_view;
pub use repos::draw_repos_view;

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}
