//! Git branch operations

use std::path::Path;

use super::{run_git, GitError};

/// Create or reset `branch_name` at the current commit and check it out.
///
/// Uses `checkout -B`: an existing local branch of the same name is
/// moved to the current commit rather than rejected.
pub fn switch_branch(dir: &Path, branch_name: &str) -> Result<(), GitError> {
    let output = run_git(dir, &["checkout", "-B", branch_name])?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::OperationFailed(stderr.trim().to_string()));
    }
    Ok(())
}

/// Check if a local branch exists
pub fn branch_exists(dir: &Path, branch_name: &str) -> bool {
    run_git(
        dir,
        &[
            "rev-parse",
            "--verify",
            &format!("refs/heads/{}", branch_name),
        ],
    )
    .map(|o| o.status.success())
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{current_branch, open_repo};
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .current_dir(dir)
            .args(args)
            .output()
            .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn setup_test_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "-b", "main"]);
        git(temp.path(), &["config", "user.name", "Test User"]);
        git(temp.path(), &["config", "user.email", "test@example.com"]);
        fs::write(temp.path().join("README.md"), "# Test").unwrap();
        git(temp.path(), &["add", "README.md"]);
        git(temp.path(), &["commit", "-m", "Initial commit"]);
        temp
    }

    #[test]
    fn test_switch_branch_creates_new() {
        let temp = setup_test_repo();

        switch_branch(temp.path(), "feature").unwrap();

        let repo = open_repo(temp.path()).unwrap();
        assert_eq!(current_branch(&repo).unwrap(), "feature");
        assert!(branch_exists(temp.path(), "feature"));
    }

    #[test]
    fn test_switch_branch_resets_existing() {
        let temp = setup_test_repo();

        git(temp.path(), &["branch", "stale"]);
        switch_branch(temp.path(), "stale").unwrap();

        let repo = open_repo(temp.path()).unwrap();
        assert_eq!(current_branch(&repo).unwrap(), "stale");
    }

    #[test]
    fn test_branch_exists() {
        let temp = setup_test_repo();

        assert!(branch_exists(temp.path(), "main"));
        assert!(!branch_exists(temp.path(), "feature"));
    }
}
