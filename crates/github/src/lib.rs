pub mod client;
pub mod error;
pub mod types;

pub use client::{GitHubClient, DEFAULT_API_URL, DEFAULT_BRANCH};
pub use error::{GitHubError, Result};
