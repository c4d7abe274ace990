//! Target-branch resolution
//!
//! A push needs a target branch. Resolution sits behind a trait so the
//! interactive prompt is just one implementation; batch callers and
//! tests supply a deterministic answer instead of blocking on stdin.

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::output::Output;

/// Decides which branch a directory's changes are pushed to.
pub trait BranchResolver {
    /// Resolve the target branch, given the currently checked out branch.
    fn resolve(&self, current_branch: &str) -> anyhow::Result<String>;
}

/// Always answers with the branch named on the command line (`--branch`).
pub struct FixedBranch(pub String);

impl BranchResolver for FixedBranch {
    fn resolve(&self, _current_branch: &str) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}

/// Pushes to the current branch without asking (`--yes`).
pub struct AssumeCurrent;

impl BranchResolver for AssumeCurrent {
    fn resolve(&self, current_branch: &str) -> anyhow::Result<String> {
        Ok(current_branch.to_string())
    }
}

/// Confirms the current branch on the terminal, asking for an explicit
/// branch name when the user declines.
pub struct InteractivePrompt;

impl BranchResolver for InteractivePrompt {
    fn resolve(&self, current_branch: &str) -> anyhow::Result<String> {
        let push_current = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Push to current branch {}?",
                Output::branch_name(current_branch)
            ))
            .default(true)
            .interact()?;

        if push_current {
            return Ok(current_branch.to_string());
        }

        let target: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Target branch name")
            .interact_text()?;
        Ok(target.trim().to_string())
    }
}
