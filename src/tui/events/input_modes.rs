use crossterm::event::KeyCode;

use super::super::input::apply_search_filter;
use super::super::state::{InputMode, TuiState};
use super::Action;
use crate::error::GhError;

/// Handle username entry; Enter submits a fetch for the trimmed name.
pub(super) fn handle_username_input(code: KeyCode, state: &mut TuiState) -> Action {
    match code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            let login = state.username_input.trim().to_string();
            if login.is_empty() {
                state.error = Some(GhError::EmptyUsername.to_string());
            } else {
                return Action::FetchProfile(login);
            }
        }
        KeyCode::Backspace => {
            state.username_input.pop();
        }
        KeyCode::Char(c) => {
            state.username_input.push(c);
        }
        _ => {}
    }
    Action::None
}

/// Handle repository filter keystrokes, applying the filter on every change.
pub(super) fn handle_filter_input(code: KeyCode, state: &mut TuiState) {
    match code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_query.clear();
            apply_search_filter(state);
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            apply_search_filter(state);
        }
        KeyCode::Backspace => {
            state.filter_query.pop();
            apply_search_filter(state);
        }
        KeyCode::Char(c) => {
            state.filter_query.push(c);
            apply_search_filter(state);
        }
        _ => {}
    }
}
