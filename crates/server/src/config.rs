use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_BUILD_WAIT_SECS: u64 = 10;

/// Process-wide configuration, loaded once at startup and handed to
/// `AppState` explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Token every inbound request must match exactly.
    pub secret: String,
    pub github_token: String,
    pub github_username: String,
    pub github_api_url: String,
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub model: String,
    /// Flat wait between enabling Pages and reading the tip commit.
    pub pages_build_wait: Duration,
    /// Directory round-2 clones land in.
    pub workspace_root: PathBuf,
    /// Overrides the authenticated GitHub remote for round-2 clones.
    pub git_remote_base: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("SECRET_KEY").context("SECRET_KEY not set")?;
        let github_token = std::env::var("GITHUB_TOKEN").context("GITHUB_TOKEN not set")?;
        let github_username =
            std::env::var("GITHUB_USERNAME").context("GITHUB_USERNAME not set")?;
        let openrouter_api_key = std::env::var("AIPIPE_KEY").context("AIPIPE_KEY not set")?;

        let pages_build_wait = match std::env::var("PAGES_BUILD_WAIT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .context("PAGES_BUILD_WAIT_SECS must be an integer")?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_BUILD_WAIT_SECS),
        };

        Ok(Self {
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            secret,
            github_token,
            github_username,
            github_api_url: env_or("GITHUB_API_URL", github::DEFAULT_API_URL),
            openrouter_api_key,
            openrouter_base_url: env_or(
                "OPENROUTER_BASE_URL",
                generator::openrouter::DEFAULT_BASE_URL,
            ),
            model: env_or("GENERATOR_MODEL", generator::DEFAULT_MODEL),
            pages_build_wait,
            workspace_root: PathBuf::from(env_or("WORKSPACE_ROOT", ".")),
            git_remote_base: std::env::var("GIT_REMOTE_BASE").ok(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
