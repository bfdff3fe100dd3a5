pub mod client;
pub mod config;

pub use client::{GitHubClient, ProfileData};
pub use config::{ClientConfig, DEFAULT_API_URL, REPOS_PER_PAGE};
