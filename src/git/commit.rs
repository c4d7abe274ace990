//! Staging and committing

use std::path::Path;

use super::{run_git, GitError};

/// Stage every change in the working tree, including deletions.
pub fn stage_all(dir: &Path) -> Result<(), GitError> {
    let output = run_git(dir, &["add", "-A"])?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::OperationFailed(stderr.trim().to_string()));
    }
    Ok(())
}

/// Commit staged changes with the given message.
pub fn commit_staged(dir: &Path, message: &str) -> Result<(), GitError> {
    let output = run_git(dir, &["commit", "-m", message])?;
    if !output.status.success() {
        // "nothing to commit" lands on stdout, real failures on stderr
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if stderr.trim().is_empty() {
            stdout
        } else {
            stderr
        };
        return Err(GitError::OperationFailed(detail.trim().to_string()));
    }
    Ok(())
}
