use anyhow::Context;
use tracing::info;

use super::output::{output_chart, output_json, output_ndjson};
use crate::api::{ClientConfig, GitHubClient};
use crate::cli::CommonArgs;
use crate::error::{GhError, Result};
use crate::model::Repository;
use crate::util::with_spinner;

pub fn exec(
    common: &CommonArgs,
    username: &str,
    repo: Option<&str>,
    json: bool,
    ndjson: bool,
) -> anyhow::Result<()> {
    let client = GitHubClient::new(ClientConfig::from_args(common)).context("Failed to build API client")?;
    let interactive = !json && !ndjson;

    let repos = with_spinner(interactive, "Fetching repositories...", || client.fetch_repos(username))?;
    let selected = select_repository(&repos, repo)?;

    let weeks = with_spinner(interactive, "Fetching commit activity...", || {
        client.fetch_commit_activity(username, &selected.name)
    })?;

    let zone = common.zone();
    let months = zone.aggregate(&weeks);
    info!(repo = %selected.name, weeks = weeks.len(), months = months.len(), zone = zone.label(), "aggregated");

    if json {
        output_json(&months, username.trim(), &selected.name, zone)?;
    } else if ndjson {
        output_ndjson(&months)?;
    } else {
        output_chart(&months, &selected.name, zone)?;
    }

    Ok(())
}

/// Picks the named repository (case-insensitive), or the first one when no name is given.
pub fn select_repository<'a>(repos: &'a [Repository], name: Option<&str>) -> Result<&'a Repository> {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => repos
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GhError::RepoNotFound(name.to_string())),
        None => repos.first().ok_or(GhError::NoRepositories),
    }
}
