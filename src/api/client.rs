use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

use super::config::{ClientConfig, REPOS_PER_PAGE};
use crate::error::{GhError, Result};
use crate::model::{Repository, UserProfile, WeekActivity};

/// Blocking client for the handful of public GitHub endpoints the dashboard reads.
pub struct GitHubClient {
    http: Client,
    base: Url,
}

/// A user together with their most recently updated repositories.
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub user: UserProfile,
    pub repos: Vec<Repository>,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| GhError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(GhError::InvalidUrl(config.base_url));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self { http, base })
    }

    /// `GET /users/{login}`
    pub fn fetch_user(&self, login: &str) -> Result<UserProfile> {
        let login = require_login(login)?;
        let url = self.endpoint(&["users", login])?;
        let response = self.get(url)?;

        match response.status() {
            s if s.is_success() => Ok(response.json()?),
            StatusCode::NOT_FOUND => Err(GhError::UserNotFound),
            s => {
                warn!(status = %s, login, "user fetch failed");
                Err(GhError::UserFetch)
            }
        }
    }

    /// `GET /users/{login}/repos`, one page sorted by last update.
    pub fn fetch_repos(&self, login: &str) -> Result<Vec<Repository>> {
        let login = require_login(login)?;
        let mut url = self.endpoint(&["users", login, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string())
            .append_pair("sort", "updated");
        let response = self.get(url)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, login, "repository fetch failed");
            return Err(GhError::ReposFetch);
        }

        let repos: Vec<Repository> = response.json()?;
        info!(login, count = repos.len(), "fetched repositories");
        Ok(repos)
    }

    /// `GET /repos/{login}/{repo}/stats/commit_activity`
    ///
    /// GitHub answers 202 with an empty object while it computes statistics,
    /// and 204 for empty repositories. Any success body that is not a JSON
    /// array is reported as [`GhError::NoCommitData`].
    pub fn fetch_commit_activity(&self, login: &str, repo: &str) -> Result<Vec<WeekActivity>> {
        let login = require_login(login)?;
        let url = self.endpoint(&["repos", login, repo.trim(), "stats", "commit_activity"])?;
        let response = self.get(url)?;

        match response.status() {
            s if s.is_success() => {
                let body = response.text()?;
                let weeks = parse_activity_body(&body)?;
                info!(login, repo, weeks = weeks.len(), "fetched commit activity");
                Ok(weeks)
            }
            StatusCode::NOT_FOUND => Err(GhError::ActivityNotFound),
            s => {
                warn!(status = %s, login, repo, "commit activity fetch failed");
                Err(GhError::ActivityFetch)
            }
        }
    }

    /// Fetches the user, then their repositories. A failure on either discards both.
    pub fn fetch_profile(&self, login: &str) -> Result<ProfileData> {
        let user = self.fetch_user(login)?;
        let repos = self.fetch_repos(&user.login)?;
        Ok(ProfileData { user, repos })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GhError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Response> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()?;
        debug!(status = %response.status(), "response");
        Ok(response)
    }
}

fn require_login(login: &str) -> Result<&str> {
    let login = login.trim();
    if login.is_empty() {
        Err(GhError::EmptyUsername)
    } else {
        Ok(login)
    }
}

/// Accepts only a JSON array of weeks; anything else means there is nothing to chart.
pub fn parse_activity_body(body: &str) -> Result<Vec<WeekActivity>> {
    if body.trim().is_empty() {
        return Err(GhError::NoCommitData);
    }
    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| GhError::NoCommitData)?;
    if !value.is_array() {
        return Err(GhError::NoCommitData);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The blocking client owns a runtime, so it is built and dropped off the async executor.
    fn client_for(uri: &str) -> GitHubClient {
        GitHubClient::new(ClientConfig::new(uri)).unwrap()
    }

    fn user_json(login: &str) -> serde_json::Value {
        json!({
            "login": login,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": format!("https://github.com/{login}"),
            "bio": null,
            "public_repos": 2,
            "followers": 1200,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "company": "@github",
            "location": "San Francisco",
            "blog": "github.blog",
            "twitter_username": null
        })
    }

    fn repo_json(id: u64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "html_url": format!("https://github.com/octocat/{name}"),
            "description": "demo",
            "stargazers_count": 10,
            "forks_count": 2,
            "language": "Rust",
            "updated_at": "2024-05-01T10:00:00Z",
            "topics": ["cli"],
            "visibility": "public"
        })
    }

    #[test]
    fn activity_body_must_be_an_array() {
        assert!(matches!(parse_activity_body(""), Err(GhError::NoCommitData)));
        assert!(matches!(parse_activity_body("{}"), Err(GhError::NoCommitData)));
        assert!(matches!(parse_activity_body("not json"), Err(GhError::NoCommitData)));
        let weeks = parse_activity_body(r#"[{"week":1,"total":2,"days":[1,1,0,0,0,0,0]}]"#).unwrap();
        assert_eq!(weeks.len(), 1);
        assert!(parse_activity_body("[]").unwrap().is_empty());
    }

    #[test]
    fn blank_login_is_rejected_before_any_request() {
        let client = GitHubClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        assert!(matches!(client.fetch_user("   "), Err(GhError::EmptyUsername)));
        assert!(matches!(client.fetch_repos(""), Err(GhError::EmptyUsername)));
    }

    #[test]
    fn invalid_base_url_is_reported() {
        assert!(matches!(
            GitHubClient::new(ClientConfig::new("not a url")),
            Err(GhError::InvalidUrl(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_user_maps_status_codes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("octocat")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let uri = server.uri();
        let results = tokio::task::spawn_blocking(move || {
            let client = client_for(&uri);
            (
                client.fetch_user("octocat"),
                client.fetch_user("ghost"),
                client.fetch_user("broken"),
            )
        })
        .await
        .unwrap();

        assert_eq!(results.0.unwrap().followers, 1200);
        assert!(matches!(results.1, Err(GhError::UserNotFound)));
        assert!(matches!(results.2, Err(GhError::UserFetch)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_repos_requests_one_sorted_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "100"))
            .and(query_param("sort", "updated"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([repo_json(1, "alpha"), repo_json(2, "beta")])),
            )
            .mount(&server)
            .await;

        let uri = server.uri();
        let repos = tokio::task::spawn_blocking(move || client_for(&uri).fetch_repos("octocat"))
            .await
            .unwrap()
            .unwrap();
        let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn profile_fetch_fails_as_a_whole_when_repos_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("octocat")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = tokio::task::spawn_blocking(move || client_for(&uri).fetch_profile("octocat"))
            .await
            .unwrap();
        assert!(matches!(result, Err(GhError::ReposFetch)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn commit_activity_distinguishes_missing_and_pending_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/hello/stats/commit_activity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"week": 1_709_424_000, "total": 5, "days": [1, 0, 2, 0, 1, 1, 0]}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/pending/stats/commit_activity"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/missing/stats/commit_activity"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/flaky/stats/commit_activity"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (ok, pending, missing, flaky) = tokio::task::spawn_blocking(move || {
            let client = client_for(&uri);
            (
                client.fetch_commit_activity("octocat", "hello"),
                client.fetch_commit_activity("octocat", "pending"),
                client.fetch_commit_activity("octocat", "missing"),
                client.fetch_commit_activity("octocat", "flaky"),
            )
        })
        .await
        .unwrap();

        assert_eq!(ok.unwrap()[0].total, 5);
        assert!(matches!(pending, Err(GhError::NoCommitData)));
        assert!(matches!(missing, Err(GhError::ActivityNotFound)));
        assert!(matches!(flaky, Err(GhError::ActivityFetch)));
    }
}
