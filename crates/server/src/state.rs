use std::sync::Arc;

use generator::{OpenRouterClient, SiteGenerator};
use github::GitHubClient;
use orchestrator::{Deployer, EvaluationNotifier, Patcher};
use vcs::GitCli;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    secret: Arc<String>,
    pub deployer: Arc<Deployer>,
    pub patcher: Arc<Patcher>,
    pub notifier: EvaluationNotifier,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, github::GitHubError> {
        let github = GitHubClient::new(
            config.github_token.clone(),
            config.github_username.clone(),
            config.github_api_url.clone(),
        )?;

        let llm = OpenRouterClient::new(
            config.openrouter_api_key.clone(),
            config.openrouter_base_url.clone(),
        );
        let site_generator = SiteGenerator::new(llm, config.model.clone());
        let deployer = Deployer::new(github.clone(), site_generator, config.pages_build_wait);

        let git = GitCli::new(config.workspace_root.clone());
        let mut patcher = Patcher::new(github, git);
        if let Some(base) = &config.git_remote_base {
            patcher = patcher.with_remote_base(base.clone());
        }

        Ok(Self {
            secret: Arc::new(config.secret.clone()),
            deployer: Arc::new(deployer),
            patcher: Arc::new(patcher),
            notifier: EvaluationNotifier::new(),
        })
    }

    /// Gate for every inbound request; must pass before any side effect.
    pub fn secret_matches(&self, supplied: &str) -> bool {
        supplied == self.secret.as_str()
    }
}
