use crate::activity::Zone;
use crate::api::GitHubClient;

use super::super::input::{apply_search_filter, copy_to_clipboard};
use super::super::state::{ActivityState, TuiState};

/// Fetch a user and their repositories, replacing everything from the previous query.
pub fn load_profile(state: &mut TuiState, client: &GitHubClient, login: &str) {
    state.begin_query();
    match client.fetch_profile(login) {
        Ok(data) => {
            state.username_input = data.user.login.clone();
            state.profile = Some(data);
            apply_search_filter(state);
        }
        Err(e) => {
            state.error = Some(e.to_string());
        }
    }
}

/// Fetch and aggregate commit activity for `repo`; failures stay local to the activity tab.
pub fn load_activity(state: &mut TuiState, client: &GitHubClient, zone: Zone, repo: &str) {
    let Some(login) = state.login().map(str::to_string) else {
        return;
    };
    state.activity = match client.fetch_commit_activity(&login, repo) {
        Ok(weeks) => ActivityState {
            repo: Some(repo.to_string()),
            months: zone.aggregate(&weeks),
            error: None,
            not_found: false,
        },
        Err(e) => ActivityState {
            repo: Some(repo.to_string()),
            months: Vec::new(),
            error: Some(e.to_string()),
            not_found: e.is_not_found(),
        },
    };
}

/// Copy the selected repository's URL, surfacing clipboard errors in status.
pub fn copy_repo_url(state: &mut TuiState) {
    let Some(url) = state.selected_repo().map(|r| r.html_url.clone()) else {
        return;
    };
    match copy_to_clipboard(&url) {
        Ok(()) => state.set_status(format!("Copied: {url}")),
        Err(err) => state.set_status(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClientConfig, ProfileData};
    use crate::model::UserProfile;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(login: &str) -> TuiState {
        let user = UserProfile {
            login: login.into(),
            name: None,
            avatar_url: String::new(),
            html_url: String::new(),
            bio: None,
            public_repos: 0,
            followers: 0,
            following: 0,
            created_at: None,
            company: None,
            location: None,
            blog: None,
            twitter_username: None,
        };
        let mut state = TuiState::default();
        state.profile = Some(ProfileData { user, repos: Vec::new() });
        state
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn activity_errors_record_whether_the_repository_is_gone() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/gone/stats/commit_activity"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/broken/stats/commit_activity"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (gone, broken) = tokio::task::spawn_blocking(move || {
            let client = GitHubClient::new(ClientConfig::new(uri)).unwrap();
            let mut gone = state_for("octocat");
            load_activity(&mut gone, &client, Zone::Utc, "gone");
            let mut broken = state_for("octocat");
            load_activity(&mut broken, &client, Zone::Utc, "broken");
            (gone.activity, broken.activity)
        })
        .await
        .unwrap();

        assert_eq!(gone.repo.as_deref(), Some("gone"));
        assert_eq!(gone.error.as_deref(), Some("Commit data not found for this repository."));
        assert!(gone.not_found);
        assert_eq!(
            broken.error.as_deref(),
            Some("Failed to fetch commit data. Please try again later.")
        );
        assert!(!broken.not_found);
    }
}
