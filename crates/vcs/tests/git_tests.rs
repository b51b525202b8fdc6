use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use vcs::GitCli;

fn git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Bare upstream seeded with one commit on main, mimicking a freshly
/// auto-initialized remote repository.
fn create_upstream(root: &Path) -> std::path::PathBuf {
    let seed = root.join("seed");
    std::fs::create_dir(&seed).expect("Failed to create seed dir");

    git(&["init", "--initial-branch=main"], &seed);
    git(&["config", "user.email", "test@test.com"], &seed);
    git(&["config", "user.name", "Test User"], &seed);
    std::fs::write(seed.join("README.md"), "# Test\n").expect("Failed to write README");
    git(&["add", "."], &seed);
    git(&["commit", "-m", "Initial commit"], &seed);

    let bare = root.join("upstream.git");
    git(
        &[
            "clone",
            "--bare",
            seed.to_str().unwrap(),
            bare.to_str().unwrap(),
        ],
        root,
    );
    bare
}

#[tokio::test]
async fn test_is_available() {
    let workspace = TempDir::new().unwrap();
    let cli = GitCli::new(workspace.path().to_path_buf());
    assert!(cli.is_available().await);
}

#[tokio::test]
async fn test_clone_repo_full_history() {
    let remote_dir = TempDir::new().unwrap();
    let upstream = create_upstream(remote_dir.path());

    let workspace = TempDir::new().unwrap();
    let cli = GitCli::new(workspace.path().to_path_buf());

    let repo = cli
        .clone_repo(upstream.to_str().unwrap(), "todo_abc")
        .await
        .unwrap();

    assert!(repo.join(".git").exists());
    assert!(repo.join("README.md").exists());
}

#[tokio::test]
async fn test_clone_repo_fails_over_leftover_directory() {
    let remote_dir = TempDir::new().unwrap();
    let upstream = create_upstream(remote_dir.path());

    let workspace = TempDir::new().unwrap();
    std::fs::create_dir(workspace.path().join("todo_abc")).unwrap();
    std::fs::write(workspace.path().join("todo_abc/stale"), "x").unwrap();

    let cli = GitCli::new(workspace.path().to_path_buf());
    let result = cli.clone_repo(upstream.to_str().unwrap(), "todo_abc").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_commit_push_and_head_commit() {
    let remote_dir = TempDir::new().unwrap();
    let upstream = create_upstream(remote_dir.path());

    let workspace = TempDir::new().unwrap();
    let cli = GitCli::new(workspace.path().to_path_buf());
    let repo = cli
        .clone_repo(upstream.to_str().unwrap(), "todo_abc")
        .await
        .unwrap();

    let before = cli.head_commit(&repo).await.unwrap();

    std::fs::write(repo.join("index.html"), "<html></html>\n").unwrap();
    cli.commit_all(&repo, "Round 2 update: SVG support")
        .await
        .unwrap();
    cli.push(&repo).await.unwrap();

    let after = cli.head_commit(&repo).await.unwrap();
    assert_ne!(before, after);
    assert_eq!(after.len(), 40);
    assert!(after.chars().all(|c| c.is_ascii_hexdigit()));

    // The upstream tip must have advanced to the pushed commit.
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(&upstream)
        .output()
        .expect("Failed to run git");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), after);
}
