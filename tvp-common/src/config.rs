// tvp-common/src/config.rs
use std::path::{Path, PathBuf};

use directories::UserDirs;
use tracing::debug;

use super::catalog;
use super::error::{Result, TvpError};
use super::model::PatchSpec;

/// Install locations probed for the bundle, relative to the home directory.
const CANDIDATE_SUFFIXES: &[&str] = &[
    ".claude/local/node_modules/@anthropic-ai/claude-code/cli.js",
    ".config/claude/local/node_modules/@anthropic-ai/claude-code/cli.js",
];

const BACKUP_SUFFIX: &str = ".backup";

#[derive(Debug, Clone)]
pub struct Config {
    pub home_dir: PathBuf,
    /// Absolute candidate paths, in probe order.
    pub candidates: Vec<PathBuf>,
    /// Patch table, in application order.
    pub patches: Vec<PatchSpec>,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading tvp configuration");

        let home_dir = UserDirs::new()
            .map(|ud| ud.home_dir().to_path_buf())
            .ok_or_else(|| {
                TvpError::Config("Could not determine the current user's home directory".into())
            })?;
        debug!("Effective home directory: {}", home_dir.display());

        Ok(Self::with_home(home_dir))
    }

    /// Builds the default configuration rooted at an arbitrary home directory.
    pub fn with_home(home_dir: impl Into<PathBuf>) -> Self {
        let home_dir = home_dir.into();
        let candidates = CANDIDATE_SUFFIXES
            .iter()
            .map(|suffix| home_dir.join(suffix))
            .collect();
        Self {
            home_dir,
            candidates,
            patches: catalog::builtin_patches(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn patches(&self) -> &[PatchSpec] {
        &self.patches
    }
}

/// Sibling path holding the pristine copy of `target`: `<target>.backup`.
pub fn backup_path_for(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
