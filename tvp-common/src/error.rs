use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TvpError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error(
        "Could not find Claude Code installation\n\nSearched in:\n{}\n\nPlease ensure Claude Code is installed.",
        render_searched(.searched)
    )]
    TargetNotFound { searched: Vec<PathBuf> },

    #[error("Backup file not found at: {}", .0.display())]
    BackupMissing(PathBuf),

    #[error(
        "No patches to apply\nPatches may already be applied or version may have changed.\nRun with --dry-run to see details."
    )]
    NoApplicablePatches,

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IoError: {0}")]
    IoError(String),
}

fn render_searched(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<std::io::Error> for TvpError {
    fn from(err: std::io::Error) -> Self {
        TvpError::Io(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, TvpError>;
