use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhError>;

#[derive(Error, Debug)]
pub enum GhError {
    #[error("Please enter a GitHub username")]
    EmptyUsername,
    #[error("User not found. Please check the username and try again.")]
    UserNotFound,
    #[error("Failed to fetch user data. Please try again later.")]
    UserFetch,
    #[error("Failed to fetch repositories. Please try again later.")]
    ReposFetch,
    #[error("Commit data not found for this repository.")]
    ActivityNotFound,
    #[error("Failed to fetch commit data. Please try again later.")]
    ActivityFetch,
    #[error("No commit data available for this repository.")]
    NoCommitData,
    #[error("Repository not found in the fetched list: {0}")]
    RepoNotFound(String),
    #[error("User has no public repositories")]
    NoRepositories,
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl GhError {
    /// True for errors caused by a missing user or repository rather than a failed request.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GhError::UserNotFound | GhError::ActivityNotFound | GhError::RepoNotFound(_)
        )
    }
}

impl From<arboard::Error> for GhError {
    fn from(err: arboard::Error) -> Self {
        GhError::Clipboard(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_found_and_generic_failures_have_distinct_messages() {
        assert_eq!(
            GhError::UserNotFound.to_string(),
            "User not found. Please check the username and try again."
        );
        assert_eq!(
            GhError::UserFetch.to_string(),
            "Failed to fetch user data. Please try again later."
        );
        assert_eq!(
            GhError::ActivityNotFound.to_string(),
            "Commit data not found for this repository."
        );
        assert!(GhError::UserNotFound.is_not_found());
        assert!(!GhError::UserFetch.is_not_found());
        assert!(!GhError::NoCommitData.is_not_found());
    }
}
