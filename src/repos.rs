use anyhow::Context;
use chrono::Utc;
use console::style;

use crate::api::{ClientConfig, GitHubClient};
use crate::cli::CommonArgs;
use crate::model::{Repository, ReposOutput, SCHEMA_VERSION};
use crate::util::{language_color, relative_time, truncate, with_spinner};

pub const EMPTY_FILTER: &str = "No repositories found matching your search.";

pub fn exec(
    common: &CommonArgs,
    username: &str,
    filter: Option<&str>,
    json: bool,
    ndjson: bool,
) -> anyhow::Result<()> {
    let client = GitHubClient::new(ClientConfig::from_args(common)).context("Failed to build API client")?;
    let repos = with_spinner(!json && !ndjson, "Fetching repositories...", || client.fetch_repos(username))?;

    let term = filter.unwrap_or("");
    let matching: Vec<Repository> = filter_repositories(&repos, term).into_iter().cloned().collect();

    if json {
        let output = ReposOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            login: username.trim().to_string(),
            filter: filter.map(str::to_string),
            repositories: matching,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ndjson {
        for repo in &matching {
            println!("{}", serde_json::to_string(repo)?);
        }
    } else {
        output_list(&matching, repos.len());
    }

    Ok(())
}

/// True when `term` appears (case-insensitively) in the name, description, or any topic.
pub fn matches_term(repo: &Repository, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    repo.name.to_lowercase().contains(&term)
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&term))
        || repo.topics.iter().any(|t| t.to_lowercase().contains(&term))
}

/// Repositories matching `term`, in their original order.
pub fn filter_repositories<'a>(repos: &'a [Repository], term: &str) -> Vec<&'a Repository> {
    repos.iter().filter(|r| matches_term(r, term)).collect()
}

fn output_list(repos: &[Repository], total: usize) {
    if repos.is_empty() {
        println!("{EMPTY_FILTER}");
        return;
    }

    let now = Utc::now();
    println!("{}", style(format!("Repositories ({}/{total})", repos.len())).bold());
    println!("{}", "─".repeat(60));

    for repo in repos {
        let badge = if repo.is_public() {
            style(format!("[{}]", repo.visibility)).dim()
        } else {
            style(format!("[{}]", repo.visibility)).yellow()
        };
        println!("{} {}", style(&repo.name).cyan().bold(), badge);
        if let Some(desc) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            println!("  {}", truncate(desc, 100));
        }
        if !repo.topics.is_empty() {
            let topics: Vec<String> = repo.topics.iter().map(|t| style(t).green().to_string()).collect();
            println!("  {}", topics.join(" "));
        }

        let mut meta = Vec::new();
        if let Some(lang) = repo.language.as_deref() {
            meta.push(format!("{} {lang}", style("●").color256(language_color(lang))));
        }
        meta.push(format!("★ {}", repo.stargazers_count));
        meta.push(format!("⑂ {}", repo.forks_count));
        if let Some(updated) = repo.updated_at {
            meta.push(format!("Updated {}", relative_time(&updated, &now)));
        }
        println!("  {}", style(meta.join("   ")).dim());
        println!();
    }
}
