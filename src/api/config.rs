use std::time::Duration;

use crate::cli::CommonArgs;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Fixed page size for the repository listing. Only the first page is fetched.
pub const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_args(common: &CommonArgs) -> Self {
        Self::new(common.api_url.trim_end_matches('/')).with_timeout(common.timeout.into())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("ghscope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
