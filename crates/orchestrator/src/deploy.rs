use std::time::Duration;

use generator::SiteGenerator;
use github::GitHubClient;
use pagepress_core::{project_name, Deployment};
use tracing::{info, warn};

use crate::error::Result;

/// Sentinel reported when the tip commit cannot be resolved after a deploy.
pub const UNKNOWN_COMMIT: &str = "unknown";

/// Round 1: create the repository, generate the site, upload it and turn on
/// Pages publishing.
pub struct Deployer {
    github: GitHubClient,
    generator: SiteGenerator,
    build_wait: Duration,
}

impl Deployer {
    pub fn new(github: GitHubClient, generator: SiteGenerator, build_wait: Duration) -> Self {
        Self {
            github,
            generator,
            build_wait,
        }
    }

    /// Run the full round-1 sequence.
    ///
    /// There is no rollback on partial failure: creation and publishing are
    /// idempotent and uploads overwrite, so a retried call succeeds over
    /// whatever an earlier attempt left behind.
    pub async fn run(&self, task: &str, nonce: &str, brief: &str) -> Result<Deployment> {
        let repo = project_name(task, nonce);
        info!("Round 1 deploying {}", repo);

        self.github.create_repo(&repo).await?;

        let files = self.generator.generate_site(brief).await?;
        for file in &files {
            self.github
                .put_file(&repo, &file.name, file.content.as_bytes())
                .await?;
        }

        self.github.enable_pages(&repo).await?;

        // Flat wait for the Pages build pipeline, not a poll.
        tokio::time::sleep(self.build_wait).await;

        let commit_sha = match self
            .github
            .latest_commit(&repo, github::DEFAULT_BRANCH)
            .await
        {
            Ok(sha) => sha,
            Err(e) => {
                warn!("Could not resolve tip of {}: {}", repo, e);
                UNKNOWN_COMMIT.to_string()
            }
        };

        let pages_url = self.github.pages_url(&repo);
        info!("Deployed {} at {}", repo, pages_url);

        Ok(Deployment {
            repo_url: self.github.repo_url(&repo),
            pages_url,
            repo_name: repo,
            commit_sha,
        })
    }
}
