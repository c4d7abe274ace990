//! Git remote operations

use std::path::Path;

use super::{run_git, GitError};

/// Push `branch_name` to the `origin` remote.
pub fn push_branch(dir: &Path, branch_name: &str) -> Result<(), GitError> {
    let output = run_git(dir, &["push", "origin", branch_name])?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(interpret_push_error(&stderr));
    }
    Ok(())
}

/// Map git's push stderr onto the error taxonomy.
///
/// Git reports authentication problems with a "Permission denied" line;
/// that exact substring is the contract. Anything else surfaces the raw
/// stderr text.
fn interpret_push_error(stderr: &str) -> GitError {
    if stderr.contains("Permission denied") {
        GitError::PermissionDenied
    } else {
        GitError::PushFailed(stderr.trim().to_string())
    }
}
