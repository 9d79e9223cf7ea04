// tvp-core/src/locate.rs
use std::path::PathBuf;

use tracing::debug;
use tvp_aio::check_path_exists;
use tvp_common::config::Config;
use tvp_common::error::{Result, TvpError};

/// Returns the first configured candidate that exists on disk.
///
/// Probing is read-only. When nothing matches, the error carries every
/// probed path so the caller can show the user where it looked.
pub fn locate(config: &Config) -> Result<PathBuf> {
    for candidate in config.candidates() {
        debug!("Probing {}", candidate.display());
        if check_path_exists(candidate) {
            debug!("Found target at {}", candidate.display());
            return Ok(candidate.clone());
        }
    }
    Err(TvpError::TargetNotFound {
        searched: config.candidates().to_vec(),
    })
}
