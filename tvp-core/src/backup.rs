// tvp-core/src/backup.rs
use std::path::{Path, PathBuf};

use tracing::debug;
use tvp_aio::{atomic_write_file, check_path_exists, copy_file, read_to_bytes};
use tvp_common::config::backup_path_for;
use tvp_common::error::{Result, TvpError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// A fresh copy of the target was written.
    Created { path: PathBuf, bytes: u64 },
    /// A backup was already present and has been left alone.
    Existing(PathBuf),
}

/// Copies `target` to its backup path unless a backup already exists.
///
/// An existing backup is never overwritten: it always holds the contents the
/// target had before the first successful patch run.
pub fn ensure_backup(target: &Path) -> Result<BackupStatus> {
    let path = backup_path_for(target);
    if check_path_exists(&path) {
        debug!("Backup already present at {}", path.display());
        return Ok(BackupStatus::Existing(path));
    }
    let bytes = copy_file(target, &path)?;
    debug!("Backed up {} bytes to {}", bytes, path.display());
    Ok(BackupStatus::Created { path, bytes })
}

/// Replaces `target` with the contents of its backup.
///
/// Fails with [`TvpError::BackupMissing`] and leaves the target untouched when
/// there is no backup. The backup itself is kept.
pub fn restore(target: &Path) -> Result<u64> {
    let path = backup_path_for(target);
    if !check_path_exists(&path) {
        return Err(TvpError::BackupMissing(path));
    }
    let bytes = read_to_bytes(&path)?;
    atomic_write_file(target, &bytes)?;
    debug!("Restored {} bytes from {}", bytes.len(), path.display());
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn creates_backup_once_and_never_overwrites() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("cli.js");
        fs::write(&target, "original").unwrap();

        let first = ensure_backup(&target).unwrap();
        assert_eq!(
            first,
            BackupStatus::Created {
                path: tmp.path().join("cli.js.backup"),
                bytes: 8
            }
        );

        fs::write(&target, "patched").unwrap();
        let second = ensure_backup(&target).unwrap();
        assert_eq!(second, BackupStatus::Existing(tmp.path().join("cli.js.backup")));
        assert_eq!(fs::read_to_string(backup_path_for(&target)).unwrap(), "original");
    }

    #[test]
    fn restore_copies_backup_over_target() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("cli.js");
        fs::write(&target, "original").unwrap();
        ensure_backup(&target).unwrap();
        fs::write(&target, "patched and longer").unwrap();

        assert_eq!(restore(&target).unwrap(), 8);
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
        assert!(backup_path_for(&target).exists());
    }

    #[test]
    fn restore_without_backup_leaves_target_alone() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("cli.js");
        fs::write(&target, "patched").unwrap();

        let err = restore(&target).unwrap_err();
        assert!(matches!(err, TvpError::BackupMissing(p) if p == tmp.path().join("cli.js.backup")));
        assert_eq!(fs::read_to_string(&target).unwrap(), "patched");
    }
}
