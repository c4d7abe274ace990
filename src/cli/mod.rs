//! CLI layer
//!
//! Terminal output formatting and the branch-resolution capability
//! used by the sync executor.

pub mod output;
pub mod prompt;

pub use output::Output;
pub use prompt::{AssumeCurrent, BranchResolver, FixedBranch, InteractivePrompt};
