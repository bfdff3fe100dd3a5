use anyhow::Context;
use chrono::{DateTime, Utc};
use console::style;

use crate::api::{ClientConfig, GitHubClient};
use crate::cli::CommonArgs;
use crate::model::{ProfileOutput, UserProfile, SCHEMA_VERSION};
use crate::util::{group_thousands, normalize_blog_url, relative_time, twitter_url, with_spinner};

pub fn exec(common: &CommonArgs, username: &str, json: bool) -> anyhow::Result<()> {
    let client = GitHubClient::new(ClientConfig::from_args(common)).context("Failed to build API client")?;
    let data = with_spinner(!json, "Fetching profile...", || client.fetch_profile(username))?;

    if json {
        let output = ProfileOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            repository_count: data.repos.len(),
            user: data.user,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_card(&data.user, data.repos.len());
    }

    Ok(())
}

/// Follower, following, and repository badges.
pub fn badges(user: &UserProfile) -> [String; 3] {
    [
        format!("{} followers", group_thousands(user.followers)),
        format!("{} following", group_thousands(user.following)),
        format!("{} repositories", group_thousands(user.public_repos)),
    ]
}

/// Labelled detail lines, only for fields the user has filled in.
pub fn details(user: &UserProfile, now: &DateTime<Utc>) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();
    let joined = user.created_at.unwrap_or(*now);
    lines.push(("Joined", relative_time(&joined, now)));
    if let Some(company) = non_empty(&user.company) {
        lines.push(("Company", company.to_string()));
    }
    if let Some(location) = non_empty(&user.location) {
        lines.push(("Location", location.to_string()));
    }
    if let Some(blog) = non_empty(&user.blog) {
        lines.push(("Blog", normalize_blog_url(blog)));
    }
    if let Some(handle) = non_empty(&user.twitter_username) {
        lines.push(("Twitter", format!("@{handle} ({})", twitter_url(handle))));
    }
    lines
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn output_card(user: &UserProfile, fetched_repos: usize) {
    let now = Utc::now();

    println!(
        "{} {}",
        style(format!("[{}]", user.initials())).cyan().bold(),
        style(user.display_name()).bold()
    );
    println!("{}", style(format!("@{}  {}", user.login, user.html_url)).dim());
    if let Some(bio) = non_empty(&user.bio) {
        println!("\n{bio}");
    }
    println!();

    let badges = badges(user);
    let rendered: Vec<String> = badges.iter().map(|b| style(b).cyan().to_string()).collect();
    println!("{}", rendered.join("  ·  "));
    println!("{}", "─".repeat(50));

    for (label, value) in details(user, &now) {
        println!("{:<9} {}", style(label).green(), value);
    }
    println!("{:<9} {fetched_repos} fetched", style("Repos").green());
}
