use std::path::Path;

use chrono::Utc;
use github::GitHubClient;
use pagepress_core::{project_name, Deployment};
use tokio::fs;
use tracing::{debug, info};
use vcs::GitCli;

use crate::error::Result;

/// Literal detected in a page to decide whether the loader was already
/// injected. Re-applying the patch is a no-op as long as this survives in
/// the page.
pub const SVG_MARKER: &str = "SVG loaded inline";

const COMMIT_MESSAGE: &str = "Round 2 update: SVG support";

const SVG_LOADER_SNIPPET: &str = r#"<script>
document.addEventListener('DOMContentLoaded', () => {
  const img = document.querySelector('img, canvas');
  if (img) {
    const src = img.getAttribute('src');
    if (src && src.endsWith('.svg')) {
      fetch(src)
        .then(r => r.text())
        .then(svg => {
          const div = document.createElement('div');
          div.innerHTML = svg;
          img.replaceWith(div.firstChild);
          console.log('SVG loaded inline');
        })
        .catch(err => console.error('SVG load error', err));
    }
  }
});
</script>"#;

/// Round 2: clone the round-1 repository, note the new brief in the readme,
/// inject the SVG inline loader into the page and push.
pub struct Patcher {
    github: GitHubClient,
    git: GitCli,
    remote_base: Option<String>,
}

impl Patcher {
    pub fn new(github: GitHubClient, git: GitCli) -> Self {
        Self {
            github,
            git,
            remote_base: None,
        }
    }

    /// Clone from `<base>/<repo>.git` instead of the authenticated GitHub
    /// remote. Integration tests point this at a local bare repository.
    pub fn with_remote_base(mut self, base: impl Into<String>) -> Self {
        self.remote_base = Some(base.into());
        self
    }

    fn remote_url(&self, repo: &str) -> String {
        match &self.remote_base {
            Some(base) => format!("{}/{}.git", base.trim_end_matches('/'), repo),
            None => self.github.remote_url(repo),
        }
    }

    /// Run the full round-2 sequence. A missing round-1 repository fails at
    /// the clone; there is no pre-check and no cleanup of partial state.
    pub async fn run(&self, task: &str, nonce: &str, brief: &str) -> Result<Deployment> {
        let repo = project_name(task, nonce);
        info!("Round 2 updating {}", repo);

        let checkout = self.git.clone_repo(&self.remote_url(&repo), &repo).await?;

        append_round_note(&checkout, brief).await?;
        patch_page(&checkout).await?;

        self.git.commit_all(&checkout, COMMIT_MESSAGE).await?;
        self.git.push(&checkout).await?;

        let commit_sha = self.git.head_commit(&checkout).await?;
        let pages_url = self.github.pages_url(&repo);
        info!("Round 2 done for {} at {}", repo, pages_url);

        Ok(Deployment {
            repo_url: self.github.repo_url(&repo),
            pages_url,
            repo_name: repo,
            commit_sha,
        })
    }
}

/// Append the dated round-2 note with the new brief to the readme.
async fn append_round_note(checkout: &Path, brief: &str) -> Result<()> {
    let readme = checkout.join("README.md");
    let mut contents = if readme.exists() {
        fs::read_to_string(&readme).await?
    } else {
        String::new()
    };

    let date = Utc::now().format("%Y-%m-%d");
    contents.push_str(&format!("\n\n## Round 2 Update ({})\n{}\n", date, brief));
    fs::write(&readme, contents).await?;
    Ok(())
}

/// Inject the loader into index.html when present and not yet patched.
async fn patch_page(checkout: &Path) -> Result<()> {
    let index = checkout.join("index.html");
    if !index.exists() {
        debug!("No index.html in checkout, skipping page patch");
        return Ok(());
    }

    let html = fs::read_to_string(&index).await?;
    let patched = inject_svg_loader(&html);
    if patched != html {
        fs::write(&index, patched).await?;
    }
    Ok(())
}

/// Insert the SVG loader script immediately before the first closing body
/// tag. Pages already carrying the marker text come back unchanged, as do
/// pages with no closing body tag.
pub fn inject_svg_loader(html: &str) -> String {
    if html.contains(SVG_MARKER) {
        return html.to_string();
    }
    html.replacen("</body>", &format!("{}\n</body>", SVG_LOADER_SNIPPET), 1)
}
