use arboard::Clipboard;

use super::TuiState;
use crate::error::Result;
use crate::repos::matches_term;

pub fn apply_search_filter(state: &mut TuiState) {
    let query = state.filter_query.clone();
    state.filtered_indices = state
        .repos()
        .iter()
        .enumerate()
        .filter(|(_, repo)| matches_term(repo, &query))
        .map(|(i, _)| i)
        .collect();

    ensure_selection_in_filtered(state);
}

pub fn ensure_selection_in_filtered(state: &mut TuiState) {
    if state.filtered_indices.is_empty() {
        return;
    }

    if !state.filtered_indices.contains(&state.selected) {
        state.selected = state.filtered_indices[0];
    }
}

/// Moves the selection by `delta` positions within the filtered list.
pub fn step_selection(state: &mut TuiState, delta: isize) {
    if state.filtered_indices.is_empty() {
        return;
    }
    let pos = state
        .filtered_indices
        .iter()
        .position(|&i| i == state.selected)
        .unwrap_or(0);
    let last = state.filtered_indices.len() - 1;
    let next = (pos as isize + delta).clamp(0, last as isize) as usize;
    state.selected = state.filtered_indices[next];
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
