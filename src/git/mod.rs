//! Git operations layer
//!
//! Read-only repository queries go through git2 (libgit2 bindings).
//! Everything that mutates state or depends on git's textual output
//! shells out to the `git` binary through [`run_git`], so the process
//! contract lives in one place.

pub mod branch;
pub mod commit;
pub mod remote;
pub mod status;

pub use branch::switch_branch;
pub use commit::{commit_staged, stage_all};
pub use remote::push_branch;
pub use status::{check_status, RepoState};

use std::path::Path;
use std::process::{Command, Output};

use git2::Repository;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository: {0}")]
    NotARepo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reference error: {0}")]
    Reference(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Permission denied. Please check your access rights and try again.")]
    PermissionDenied,

    #[error("Error pushing changes: {0}")]
    PushFailed(String),
}

/// Run a git subcommand in `dir` and capture its output.
///
/// Emits a `tracing::debug!` event with the arguments and working
/// directory just before execution. Visible when running with
/// `--verbose` (which sets `autopush=debug`) or via
/// `RUST_LOG=autopush::git=debug`.
pub fn run_git(dir: &Path, args: &[&str]) -> Result<Output, GitError> {
    debug!(
        target: "autopush::git",
        ?args,
        cwd = %dir.display(),
        "exec"
    );
    Ok(Command::new("git").args(args).current_dir(dir).output()?)
}

/// Open a git repository at the given path
pub fn open_repo<P: AsRef<Path>>(path: P) -> Result<Repository, GitError> {
    Repository::open(path.as_ref())
        .map_err(|e| GitError::NotARepo(format!("{}: {}", path.as_ref().display(), e)))
}

/// Check if a path is an initialized git repository
pub fn is_git_repo<P: AsRef<Path>>(path: P) -> bool {
    Repository::open(path.as_ref()).is_ok()
}

/// Initialize a new repository at `dir`
pub fn init_repo(dir: &Path) -> Result<(), GitError> {
    let output = run_git(dir, &["init"])?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::OperationFailed(stderr.trim().to_string()));
    }
    Ok(())
}

/// Get the current branch name.
///
/// A freshly initialized repository has an unborn HEAD that `head()`
/// refuses to resolve; the symbolic target of `HEAD` still names the
/// branch, so fall back to that.
pub fn current_branch(repo: &Repository) -> Result<String, GitError> {
    match repo.head() {
        Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
        Ok(_) => Err(GitError::Reference("HEAD is detached".to_string())),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
            let head = repo.find_reference("HEAD")?;
            head.symbolic_target()
                .and_then(|target| target.strip_prefix("refs/heads/"))
                .map(|name| name.to_string())
                .ok_or_else(|| GitError::Reference("HEAD has no branch target".to_string()))
        }
        Err(e) => Err(GitError::Reference(e.to_string())),
    }
}
