//! autopush CLI entry point

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};

use autopush::cli::output::Output;
use autopush::cli::prompt::{AssumeCurrent, BranchResolver, FixedBranch, InteractivePrompt};
use autopush::sync::{sync_directory, SyncOptions, DEFAULT_COMMIT_MESSAGE};

#[derive(Parser)]
#[command(name = "autopush")]
#[command(author, version, about = "Commit and push changes across multiple git directories", long_about = None)]
struct Cli {
    /// Directories to process
    #[arg(long, num_args = 1.., value_name = "PATH")]
    dirs: Vec<PathBuf>,

    /// File containing a list of directories, one per line
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Target branch for every push (skips the per-directory prompt)
    #[arg(short, long, value_name = "NAME")]
    branch: Option<String>,

    /// Commit message for automated commits
    #[arg(short, long, default_value = DEFAULT_COMMIT_MESSAGE)]
    message: String,

    /// Push to each directory's current branch without asking
    #[arg(short = 'y', long)]
    yes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("autopush=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut directories = cli.dirs.clone();
    if let Some(file) = &cli.file {
        directories.extend(read_directory_list(file)?);
    }

    if directories.is_empty() {
        Output::error("No directories specified");
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let resolver: Box<dyn BranchResolver> = match (&cli.branch, cli.yes) {
        (Some(branch), _) => Box::new(FixedBranch(branch.clone())),
        (None, true) => Box::new(AssumeCurrent),
        (None, false) => Box::new(InteractivePrompt),
    };

    let options = SyncOptions {
        message: cli.message,
    };

    let mut success_count = 0;
    let mut error_count = 0;
    let mut skip_count = 0;

    for dir in &directories {
        if !dir.exists() {
            Output::warning(&format!(
                "Directory {} does not exist, skipping",
                dir.display()
            ));
            skip_count += 1;
            continue;
        }

        if sync_directory(dir, &options, resolver.as_ref()) {
            success_count += 1;
        } else {
            error_count += 1;
        }
    }

    // Per-directory failures do not affect the exit status.
    println!();
    if error_count == 0 {
        Output::success(&format!(
            "Processed {} directory(s){}",
            success_count,
            if skip_count > 0 {
                format!(", {} skipped", skip_count)
            } else {
                String::new()
            }
        ));
    } else {
        Output::warning(&format!(
            "{} processed, {} failed, {} skipped",
            success_count, error_count, skip_count
        ));
    }

    Ok(())
}

/// Read directories from a list file, one path per line. Blank lines
/// are ignored; an unreadable file is fatal.
fn read_directory_list(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("File {} not found", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}
