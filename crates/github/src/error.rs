use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    /// Unexpected status from the GitHub API. Carries the status code and
    /// response body verbatim so callers can surface them unmodified.
    #[error("GitHub API error: {status}, {body}")]
    Api { status: u16, body: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;
