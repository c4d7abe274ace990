//! autopush - commit and push changes across many git working copies
//!
//! Inspects each directory's repository state, initializes new
//! repositories where needed, commits outstanding changes, and pushes
//! to a remote branch. Read-only repository queries use git2; every
//! mutating operation shells out to the `git` binary.

pub mod cli;
pub mod git;
pub mod sync;

pub use git::{GitError, RepoState};
pub use sync::{sync_directory, SyncOptions};
