use std::time::Instant;

use crate::api::ProfileData;
use crate::model::{MonthlySummary, Repository};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Profile,
    Repositories,
    Activity,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Profile, Tab::Repositories, Tab::Activity];

    pub fn index(self) -> usize {
        match self {
            Tab::Profile => 0,
            Tab::Repositories => 1,
            Tab::Activity => 2,
        }
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Username,
    Filter,
}

/// Commit activity for the repository currently shown in the activity tab.
#[derive(Debug, Default)]
pub struct ActivityState {
    pub repo: Option<String>,
    pub months: Vec<MonthlySummary>,
    pub error: Option<String>,
    /// The repository or its statistics are gone, as opposed to a failed request.
    pub not_found: bool,
}

/// All view state for one dashboard session.
///
/// Created when the dashboard starts, cleared by [`TuiState::begin_query`]
/// whenever a new username is fetched, and dropped when the dashboard exits.
pub struct TuiState {
    pub tab: Tab,
    pub show_help: bool,
    pub input_mode: InputMode,
    pub username_input: String,
    pub filter_query: String,
    pub profile: Option<ProfileData>,
    pub error: Option<String>,
    pub filtered_indices: Vec<usize>,
    pub selected: usize,
    pub activity: ActivityState,
    pub loading: Option<String>,
    pub status_message: Option<(String, Instant)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            tab: Tab::Profile,
            show_help: false,
            input_mode: InputMode::Normal,
            username_input: String::new(),
            filter_query: String::new(),
            profile: None,
            error: None,
            filtered_indices: Vec::new(),
            selected: 0,
            activity: ActivityState::default(),
            loading: None,
            status_message: None,
        }
    }
}

impl TuiState {
    pub fn with_username(username: Option<String>) -> Self {
        Self {
            username_input: username.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Drops everything tied to the previous username before a new fetch.
    pub fn begin_query(&mut self) {
        self.profile = None;
        self.error = None;
        self.filter_query.clear();
        self.filtered_indices.clear();
        self.selected = 0;
        self.activity = ActivityState::default();
        self.tab = Tab::Profile;
    }

    pub fn repos(&self) -> &[Repository] {
        self.profile.as_ref().map(|p| p.repos.as_slice()).unwrap_or(&[])
    }

    /// The highlighted repository, if it is visible under the current filter.
    pub fn selected_repo(&self) -> Option<&Repository> {
        if !self.filtered_indices.contains(&self.selected) {
            return None;
        }
        self.repos().get(self.selected)
    }

    pub fn login(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.user.login.as_str())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }
}
