use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use super::input::step_selection;
use super::state::{InputMode, Tab, TuiState};

mod actions;
mod input_modes;

pub use actions::{copy_repo_url, load_activity, load_profile};
use input_modes::{handle_filter_input, handle_username_input};

/// Work the run loop has to do after a key press. Fetches happen there so
/// the loading indicator can be drawn first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    FetchProfile(String),
    LoadActivity(String),
    CopyUrl,
}

impl Action {
    pub fn loading_message(&self) -> Option<String> {
        match self {
            Action::FetchProfile(login) => Some(format!("Loading {login}...")),
            Action::LoadActivity(repo) => Some(format!("Loading commit activity for {repo}...")),
            _ => None,
        }
    }
}

/// Handle a keyboard event, mutating TUI state and returning the follow-up action.
pub fn handle_key_events(key_event: KeyEvent, state: &mut TuiState) -> Action {
    if key_event.kind != KeyEventKind::Press {
        return Action::None;
    }

    match state.input_mode {
        InputMode::Username => return handle_username_input(key_event.code, state),
        InputMode::Filter => {
            handle_filter_input(key_event.code, state);
            return Action::None;
        }
        InputMode::Normal => {}
    }

    if state.show_help {
        if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)) {
            state.show_help = false;
        }
        return Action::None;
    }

    match key_event.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Char('u') | KeyCode::Char('s') => state.input_mode = InputMode::Username,
        KeyCode::Char('r') => {
            if let Some(login) = state.login().map(str::to_string) {
                return Action::FetchProfile(login);
            }
        }
        KeyCode::Tab => return switch_tab(state, state.tab.next()),
        KeyCode::BackTab => return switch_tab(state, state.tab.prev()),
        KeyCode::Char('1') => state.tab = Tab::Profile,
        KeyCode::Char('2') => state.tab = Tab::Repositories,
        KeyCode::Char('3') => return open_activity(state),
        KeyCode::Char('/') if state.tab == Tab::Repositories => {
            state.input_mode = InputMode::Filter;
        }
        KeyCode::Char('c') if state.tab != Tab::Profile && state.selected_repo().is_some() => {
            return Action::CopyUrl
        }
        KeyCode::Up | KeyCode::Char('k') => return move_selection(state, -1),
        KeyCode::Down | KeyCode::Char('j') => return move_selection(state, 1),
        KeyCode::Char('[') => return move_selection(state, -1),
        KeyCode::Char(']') => return move_selection(state, 1),
        KeyCode::PageUp => return move_selection(state, -10),
        KeyCode::PageDown => return move_selection(state, 10),
        KeyCode::Home | KeyCode::Char('g') => return move_selection(state, isize::MIN / 2),
        KeyCode::End | KeyCode::Char('G') => return move_selection(state, isize::MAX / 2),
        KeyCode::Enter if state.tab == Tab::Repositories && state.selected_repo().is_some() => {
            state.tab = Tab::Activity;
            return activity_for_selection(state);
        }
        _ => {}
    }

    Action::None
}

/// Handle mouse scrolling for list navigation.
pub fn handle_mouse_event(mouse_event: MouseEvent, state: &mut TuiState) -> Action {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => move_selection(state, -1),
        MouseEventKind::ScrollDown => move_selection(state, 1),
        _ => Action::None,
    }
}

fn move_selection(state: &mut TuiState, delta: isize) -> Action {
    if state.tab == Tab::Profile {
        return Action::None;
    }
    let before = state.selected;
    step_selection(state, delta);
    if state.tab == Tab::Activity && state.selected != before {
        return activity_for_selection(state);
    }
    Action::None
}

fn switch_tab(state: &mut TuiState, tab: Tab) -> Action {
    if tab == Tab::Activity {
        return open_activity(state);
    }
    state.tab = tab;
    Action::None
}

fn open_activity(state: &mut TuiState) -> Action {
    state.tab = Tab::Activity;
    if state.activity.repo.is_none() {
        return activity_for_selection(state);
    }
    Action::None
}

fn activity_for_selection(state: &TuiState) -> Action {
    match state.selected_repo() {
        Some(repo) if state.activity.repo.as_deref() != Some(repo.name.as_str()) => {
            Action::LoadActivity(repo.name.clone())
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ProfileData;
    use crate::model::{Repository, UserProfile};
    use crate::tui::input::apply_search_filter;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn press(state: &mut TuiState, code: KeyCode) -> Action {
        handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn type_text(state: &mut TuiState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn loaded_state() -> TuiState {
        let user = UserProfile {
            login: "octocat".into(),
            name: None,
            avatar_url: String::new(),
            html_url: "https://github.com/octocat".into(),
            bio: None,
            public_repos: 3,
            followers: 0,
            following: 0,
            created_at: None,
            company: None,
            location: None,
            blog: None,
            twitter_username: None,
        };
        let repos = ["hello-world", "spoon-knife", "linguist"]
            .iter()
            .enumerate()
            .map(|(i, name)| Repository {
                id: i as u64,
                name: name.to_string(),
                html_url: format!("https://github.com/octocat/{name}"),
                description: None,
                stargazers_count: 0,
                forks_count: 0,
                language: None,
                updated_at: None,
                topics: Vec::new(),
                visibility: "public".into(),
            })
            .collect();
        let mut state = TuiState::default();
        state.profile = Some(ProfileData { user, repos });
        apply_search_filter(&mut state);
        state
    }

    #[test]
    fn username_entry_submits_a_fetch() {
        let mut state = TuiState::default();
        assert_eq!(press(&mut state, KeyCode::Char('u')), Action::None);
        assert_eq!(state.input_mode, InputMode::Username);
        type_text(&mut state, "octocat");
        assert_eq!(press(&mut state, KeyCode::Enter), Action::FetchProfile("octocat".into()));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn blank_username_reports_an_error_instead_of_fetching() {
        let mut state = TuiState::default();
        press(&mut state, KeyCode::Char('u'));
        type_text(&mut state, "   ");
        assert_eq!(press(&mut state, KeyCode::Enter), Action::None);
        assert_eq!(state.error.as_deref(), Some("Please enter a GitHub username"));
    }

    #[test]
    fn q_inside_username_entry_is_text() {
        let mut state = TuiState::default();
        press(&mut state, KeyCode::Char('u'));
        assert_eq!(press(&mut state, KeyCode::Char('q')), Action::None);
        assert_eq!(state.username_input, "q");
    }

    #[test]
    fn enter_on_a_repository_opens_its_activity() {
        let mut state = loaded_state();
        state.tab = Tab::Repositories;
        press(&mut state, KeyCode::Down);
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            Action::LoadActivity("spoon-knife".into())
        );
        assert_eq!(state.tab, Tab::Activity);
    }

    #[test]
    fn activity_tab_loads_first_repository_once() {
        let mut state = loaded_state();
        assert_eq!(
            press(&mut state, KeyCode::Char('3')),
            Action::LoadActivity("hello-world".into())
        );
        state.activity.repo = Some("hello-world".into());
        assert_eq!(press(&mut state, KeyCode::Char('3')), Action::None);
        assert_eq!(
            press(&mut state, KeyCode::Char(']')),
            Action::LoadActivity("spoon-knife".into())
        );
    }

    #[test]
    fn tabbing_into_activity_loads_the_selection() {
        let mut state = loaded_state();
        assert_eq!(press(&mut state, KeyCode::Tab), Action::None);
        assert_eq!(state.tab, Tab::Repositories);
        assert_eq!(
            press(&mut state, KeyCode::Tab),
            Action::LoadActivity("hello-world".into())
        );
        assert_eq!(state.tab, Tab::Activity);
    }

    #[test]
    fn filter_mode_narrows_the_list() {
        let mut state = loaded_state();
        state.tab = Tab::Repositories;
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "ling");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filtered_indices, vec![2]);
        assert_eq!(state.selected, 2);

        press(&mut state, KeyCode::Char('/'));
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.filtered_indices, vec![0, 1, 2]);
    }

    #[test]
    fn empty_filter_result_leaves_nothing_to_open_or_copy() {
        let mut state = loaded_state();
        state.tab = Tab::Repositories;
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "zzz");
        press(&mut state, KeyCode::Enter);
        assert!(state.filtered_indices.is_empty());
        assert!(state.selected_repo().is_none());

        assert_eq!(press(&mut state, KeyCode::Enter), Action::None);
        assert_eq!(state.tab, Tab::Repositories);
        assert_eq!(press(&mut state, KeyCode::Char('c')), Action::None);
        copy_repo_url(&mut state);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn help_overlay_swallows_keys_until_closed() {
        let mut state = loaded_state();
        press(&mut state, KeyCode::Char('h'));
        assert!(state.show_help);
        assert_eq!(press(&mut state, KeyCode::Char('q')), Action::None);
        press(&mut state, KeyCode::Esc);
        assert!(!state.show_help);
        assert_eq!(press(&mut state, KeyCode::Char('q')), Action::Quit);
    }
}
