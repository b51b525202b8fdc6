use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Completion API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
