//! Per-directory sync execution
//!
//! Walks one working copy through the init / commit / push sequence.
//! Every failure is printed and folded into the boolean result; nothing
//! propagates past this boundary.

use std::path::Path;

use tracing::debug;

use crate::cli::output::Output;
use crate::cli::prompt::BranchResolver;
use crate::git::{
    check_status, commit_staged, current_branch, init_repo, open_repo, push_branch, stage_all,
    switch_branch, RepoState,
};

/// Commit message used when none is configured.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Automated commit";

/// Options shared by every directory in a run.
pub struct SyncOptions {
    /// Message used for automated commits
    pub message: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

/// Sync a single working copy: initialize it if needed, commit
/// outstanding changes, and push to the resolved target branch.
///
/// Returns `true` on success. Errors are printed, never raised.
pub fn sync_directory(dir: &Path, options: &SyncOptions, resolver: &dyn BranchResolver) -> bool {
    Output::header(&format!("Processing {}", dir.display()));

    let state = check_status(dir);
    debug!(?state, dir = %dir.display(), "status derived");

    match state {
        RepoState::Error => {
            Output::error("Unable to check repository status");
            false
        }
        RepoState::Clean => {
            Output::info("Repository is clean and up to date");
            true
        }
        RepoState::NotInitialized => init_and_resync(dir, options, resolver),
        RepoState::NeedsCommit | RepoState::NeedsPush => {
            commit_and_push(dir, state, options, resolver)
        }
    }
}

/// Initialize a repository, then re-derive its state.
///
/// A directory with content becomes `NeedsCommit` and continues down the
/// commit path. An empty directory has nothing to commit and no remote
/// to compare against, so it resolves to a no-op success.
fn init_and_resync(dir: &Path, options: &SyncOptions, resolver: &dyn BranchResolver) -> bool {
    Output::info("Initializing git repository...");
    if let Err(e) = init_repo(dir) {
        Output::error(&format!("Failed to initialize git repository: {}", e));
        return false;
    }

    match check_status(dir) {
        RepoState::NeedsCommit => commit_and_push(dir, RepoState::NeedsCommit, options, resolver),
        RepoState::Error => {
            Output::error("Unable to check repository status");
            false
        }
        _ => {
            Output::info("Initialized empty repository, nothing to commit");
            true
        }
    }
}

/// Commit outstanding changes (when present) and push to the resolved
/// target branch.
fn commit_and_push(
    dir: &Path,
    state: RepoState,
    options: &SyncOptions,
    resolver: &dyn BranchResolver,
) -> bool {
    let repo = match open_repo(dir) {
        Ok(repo) => repo,
        Err(e) => {
            Output::error(&format!("Unable to determine current branch: {}", e));
            return false;
        }
    };
    let current = match current_branch(&repo) {
        Ok(branch) => branch,
        Err(e) => {
            Output::error(&format!("Unable to determine current branch: {}", e));
            return false;
        }
    };

    // Only a dirty working tree gets staged and committed; needs-push
    // means there is nothing local to record.
    if state == RepoState::NeedsCommit {
        Output::info("Adding changes...");
        if let Err(e) = stage_all(dir) {
            Output::error(&format!("Failed to stage changes: {}", e));
            return false;
        }

        Output::info("Committing changes...");
        if let Err(e) = commit_staged(dir, &options.message) {
            Output::error(&format!("Failed to commit changes: {}", e));
            return false;
        }
    }

    let target = match resolver.resolve(&current) {
        Ok(target) => target,
        Err(e) => {
            Output::error(&format!("Unable to resolve target branch: {}", e));
            return false;
        }
    };

    if target != current {
        Output::info(&format!(
            "Switching to branch {}...",
            Output::branch_name(&target)
        ));
        if let Err(e) = switch_branch(dir, &target) {
            Output::error(&format!("Failed to switch branch: {}", e));
            return false;
        }
    }

    let spinner = Output::spinner(&format!("Pushing to branch '{}'...", target));
    match push_branch(dir, &target) {
        Ok(()) => {
            spinner.finish_and_clear();
            Output::success("Successfully pushed changes");
            true
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&e.to_string());
            false
        }
    }
}
