use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("GitHub error: {0}")]
    GitHub(#[from] github::GitHubError),

    #[error("Generation error: {0}")]
    Generator(#[from] generator::GeneratorError),

    #[error("VCS error: {0}")]
    Vcs(#[from] vcs::VcsError),

    #[error("Notification failed: {0}")]
    Notify(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
