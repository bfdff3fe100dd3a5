use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal};

use super::events::{copy_repo_url, handle_key_events, handle_mouse_event, load_activity, load_profile, Action};
use super::state::{Tab, TuiState};
use super::views::{
    draw_activity_view, draw_help_overlay, draw_profile_view, draw_repos_view, draw_search_bar,
    draw_status_line, draw_tabs,
};
use crate::activity::Zone;
use crate::api::{ClientConfig, GitHubClient};
use crate::cli::CommonArgs;

pub fn run(common: &CommonArgs, username: Option<String>) -> io::Result<()> {
    let client = GitHubClient::new(ClientConfig::from_args(common)).map_err(io::Error::other)?;
    let zone = common.zone();
    let mut state = TuiState::with_username(username);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut state, &client, zone);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    client: &GitHubClient,
    zone: Zone,
) -> io::Result<()> {
    if !state.username_input.trim().is_empty() {
        let login = state.username_input.trim().to_string();
        perform(terminal, state, client, zone, Action::FetchProfile(login))?;
    }

    loop {
        terminal.draw(|f| draw_ui(f, state))?;

        if !poll(Duration::from_millis(200))? {
            continue;
        }
        let action = match read()? {
            Event::Key(key_event) => handle_key_events(key_event, state),
            Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, state),
            _ => Action::None,
        };
        if action == Action::Quit {
            break;
        }
        perform(terminal, state, client, zone, action)?;
    }

    Ok(())
}

/// Runs a fetch or side effect, drawing the loading line first for blocking requests.
fn perform(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    client: &GitHubClient,
    zone: Zone,
    action: Action,
) -> io::Result<()> {
    if let Some(message) = action.loading_message() {
        state.loading = Some(message);
        terminal.draw(|f| draw_ui(f, state))?;
    }

    match action {
        Action::FetchProfile(login) => load_profile(state, client, &login),
        Action::LoadActivity(repo) => load_activity(state, client, zone, &repo),
        Action::CopyUrl => copy_repo_url(state),
        Action::None | Action::Quit => {}
    }

    state.loading = None;
    Ok(())
}

fn draw_ui(f: &mut Frame, state: &TuiState) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    draw_search_bar(f, chunks[0], state);
    draw_tabs(f, chunks[1], state);
    match state.tab {
        Tab::Profile => draw_profile_view(f, chunks[2], state),
        Tab::Repositories => draw_repos_view(f, chunks[2], state),
        Tab::Activity => draw_activity_view(f, chunks[2], state),
    }
    draw_status_line(f, chunks[3], state);

    if state.show_help {
        draw_help_overlay(f, size);
    }
}
