//! Repository status inspection
//!
//! Maps git's textual status output onto [`RepoState`]. The substring
//! contracts live in small classification functions so they can be
//! tested without a repository.

use std::path::Path;

use super::{is_git_repo, run_git};

/// Marker git prints when the local branch matches its upstream.
const UP_TO_DATE_MARKER: &str = "Your branch is up to date";

/// State of a working copy, derived fresh on every call. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    /// No git metadata at the path
    NotInitialized,
    /// Nothing to commit and in sync with the upstream branch
    Clean,
    /// Working tree has uncommitted or untracked changes
    NeedsCommit,
    /// Nothing to commit, but not known to match the upstream
    NeedsPush,
    /// Status could not be determined
    Error,
}

/// Determine the state of the working copy at `dir`.
///
/// Failure is part of the enumeration ([`RepoState::Error`]) rather than
/// an `Err`, so callers branch on a single value. Read-only.
pub fn check_status(dir: &Path) -> RepoState {
    if !is_git_repo(dir) {
        return RepoState::NotInitialized;
    }

    let porcelain = match run_git(dir, &["status", "--porcelain"]) {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).into_owned()
        }
        _ => return RepoState::Error,
    };

    if has_pending_changes(&porcelain) {
        return RepoState::NeedsCommit;
    }

    // Nothing to commit; the remote-tracking summary decides between
    // clean and needs-push.
    match run_git(dir, &["status", "-uno"]) {
        Ok(output) => classify_tracking(&String::from_utf8_lossy(&output.stdout)),
        Err(_) => RepoState::Error,
    }
}

/// Whether porcelain status output reports anything to commit.
fn has_pending_changes(porcelain: &str) -> bool {
    !porcelain.trim().is_empty()
}

/// Classify `git status -uno` output by the up-to-date marker.
fn classify_tracking(stdout: &str) -> RepoState {
    if stdout.contains(UP_TO_DATE_MARKER) {
        RepoState::Clean
    } else {
        RepoState::NeedsPush
    }
}
