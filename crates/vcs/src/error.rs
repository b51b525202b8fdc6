use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Invalid workspace path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VcsError>;
