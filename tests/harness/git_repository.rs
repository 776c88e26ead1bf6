use std::path::Path;

fn git(repo_dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap_or_else(|e| panic!("git {} failed to start: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

pub(crate) fn init_repo(repo_dir: &Path) {
    git(repo_dir, &["init", "--initial-branch=main"]);
    configure_user(repo_dir);
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
    git(repo_dir, &["config", "commit.gpgsign", "false"]);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Write `content` to `file` and commit it.
pub(crate) fn commit_file(repo_dir: &Path, file: &str, content: &str, message: &str) {
    std::fs::write(repo_dir.join(file), content).expect("Failed to write committed file");
    commit_all(repo_dir, message);
}
