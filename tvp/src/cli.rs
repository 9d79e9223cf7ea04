// tvp/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tvp_common::catalog::TARGET_VERSION;
use tvp_common::error::Result;
use tvp_common::{Config, PatchOutcome};
use tvp_core::{classify, locate};

pub mod apply;
pub mod preview;
pub mod report;
pub mod restore;

use crate::cli::apply::Apply;
use crate::cli::preview::Preview;
use crate::cli::restore::Restore;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    name = "tvp",
    bin_name = "tvp",
    about = format!("Claude Code Thinking Visibility Patcher (targets v{TARGET_VERSION})"),
    long_about = None,
    after_help = "Examples:\n  tvp              # Apply patches\n  tvp --dry-run    # Preview changes\n  tvp --restore    # Restore original"
)]
pub struct CliArgs {
    /// Preview changes without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Restore from backup file
    #[arg(long)]
    pub restore: bool,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Run mode, fixed once from the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Apply,
    Preview,
    Restore,
}

impl CliArgs {
    /// `--restore` wins over `--dry-run` when both are given.
    pub fn mode(&self) -> RunMode {
        if self.restore {
            RunMode::Restore
        } else if self.dry_run {
            RunMode::Preview
        } else {
            RunMode::Apply
        }
    }
}

impl RunMode {
    pub fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Apply => Apply.run(config),
            Self::Preview => Preview.run(config),
            Self::Restore => Restore.run(config),
        }
    }
}

/// Target contents and per-patch classification shared by apply and preview.
pub(crate) struct CheckedTarget {
    pub path: PathBuf,
    pub contents: String,
    pub outcomes: Vec<PatchOutcome>,
}

/// Locates and reads the target, then classifies every configured patch,
/// printing one status block per patch.
pub(crate) fn check_target(config: &Config) -> Result<CheckedTarget> {
    let path = locate(config)?;
    report::found_target(&path);

    report::step("Reading cli.js...");
    let contents = tvp_aio::read_to_string(&path)?;

    report::step("Checking patches...");
    let outcomes = classify(&contents, config.patches());
    for (index, (spec, outcome)) in config.patches().iter().zip(&outcomes).enumerate() {
        report::patch_status(index, spec, *outcome);
    }

    Ok(CheckedTarget {
        path,
        contents,
        outcomes,
    })
}
