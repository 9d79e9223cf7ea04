/*
File: tvp-aio/src/fs.rs
Purpose: Primitive synchronous filesystem operations.
*/
use std::{
    fs,
    io::Write,
    path::Path,
    sync::Arc,
};

use tempfile::NamedTempFile;
use tracing::{debug, error, warn};
use tvp_common::error::{Result, TvpError};

/// Checks if a path exists (resolving symlinks).
pub fn check_path_exists(path: &Path) -> bool {
    path.exists()
}

/// Reads the entire contents of a file into a string.
pub fn read_to_string(path: &Path) -> Result<String> {
    debug!("Reading file to string: {}", path.display());
    fs::read_to_string(path).map_err(|e| {
        error!("Failed read file {}: {}", path.display(), e);
        TvpError::from(e)
    })
}

/// Reads the entire contents of a file into a byte vector.
pub fn read_to_bytes(path: &Path) -> Result<Vec<u8>> {
    debug!("Reading file to bytes: {}", path.display());
    fs::read(path).map_err(|e| {
        error!("Failed read file {}: {}", path.display(), e);
        TvpError::from(e)
    })
}

/// Copies `from` to `to` byte-for-byte, creating or truncating `to`.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    debug!("Copying {} -> {}", from.display(), to.display());
    fs::copy(from, to).map_err(|e| {
        error!("Failed copy {} -> {}: {}", from.display(), to.display(), e);
        TvpError::from(e)
    })
}

/// Atomically writes data to a file using a temporary file.
/// Preserves original permissions if possible.
pub fn atomic_write_file(original_path: &Path, content: &[u8]) -> Result<()> {
    let dir = original_path.parent().ok_or_else(|| {
        TvpError::IoError(format!(
            "Cannot get parent directory for {}",
            original_path.display()
        ))
    })?;

    let original_perms = fs::metadata(original_path).map(|m| m.permissions()).ok();

    let mut temp_file = NamedTempFile::new_in(dir)?;
    let temp_path = temp_file.path().to_path_buf();

    debug!(
        "Atomically writing {} bytes to {} via temp file {}",
        content.len(),
        original_path.display(),
        temp_path.display()
    );

    temp_file.write_all(content)?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;

    temp_file.persist(original_path).map_err(|e| {
        error!(
            "Failed to persist temporary file {} over {}: {}",
            temp_path.display(),
            original_path.display(),
            e.error
        );
        TvpError::Io(Arc::new(e.error))
    })?;

    // NamedTempFile is created 0600; put the target's mode back.
    if let Some(perms) = original_perms {
        if let Err(e) = fs::set_permissions(original_path, perms) {
            warn!(
                "Failed to restore original permissions on {}: {}",
                original_path.display(),
                e
            );
        }
    }

    Ok(())
}
