use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::Repository;
use crate::tui::state::TuiState;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Filtered repositories that fit in `rows`, scrolled to keep the selection centred.
pub fn get_visible_repos<'a>(
    repos: &'a [Repository],
    state: &TuiState,
    rows: usize,
) -> Vec<(&'a Repository, bool)> {
    let filtered: Vec<_> = state
        .filtered_indices
        .iter()
        .filter_map(|&i| repos.get(i).map(|r| (i, r)))
        .collect();

    if filtered.is_empty() || rows == 0 {
        return Vec::new();
    }

    let selected_in_filtered = filtered
        .iter()
        .position(|(i, _)| *i == state.selected)
        .unwrap_or(0);

    let start = selected_in_filtered
        .saturating_sub(rows / 2)
        .min(filtered.len().saturating_sub(rows));
    let end = (start + rows).min(filtered.len());

    filtered[start..end]
        .iter()
        .map(|&(i, repo)| (repo, i == state.selected))
        .collect()
}
