use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

use crate::error::{Result, VcsError};

/// Thin wrapper over the git CLI, rooted at a workspace directory where
/// round-2 clones land.
pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    async fn run_git(&self, args: &[&str], cwd: &Path) -> Result<String> {
        debug!("Running git {:?} in {:?}", args, cwd);

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VcsError::CommandFailed(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub async fn is_available(&self) -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Full-history clone of `remote_url` into `<workspace_root>/<dir_name>`.
    ///
    /// A leftover directory of the same name makes the clone fail; callers
    /// treat that as fatal for the round and nothing is cleaned up.
    pub async fn clone_repo(&self, remote_url: &str, dir_name: &str) -> Result<PathBuf> {
        let target = self.workspace_root.join(dir_name);
        let dir = target
            .to_str()
            .ok_or_else(|| VcsError::InvalidPath(target.display().to_string()))?;

        self.run_git(&["clone", remote_url, dir], &self.workspace_root)
            .await?;

        Ok(target)
    }

    /// Stage everything and commit with `message`.
    ///
    /// The identity is passed inline; the hosting environment has no global
    /// git config.
    pub async fn commit_all(&self, repo: &Path, message: &str) -> Result<()> {
        self.run_git(&["add", "-A"], repo).await?;
        self.run_git(
            &[
                "-c",
                "user.name=pagepress",
                "-c",
                "user.email=pagepress@localhost",
                "commit",
                "-m",
                message,
            ],
            repo,
        )
        .await?;
        Ok(())
    }

    pub async fn push(&self, repo: &Path) -> Result<()> {
        self.run_git(&["push"], repo).await?;
        Ok(())
    }

    pub async fn head_commit(&self, repo: &Path) -> Result<String> {
        let output = self.run_git(&["rev-parse", "HEAD"], repo).await?;
        Ok(output.trim().to_string())
    }
}
