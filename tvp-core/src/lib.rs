// tvp-core/src/lib.rs
//! Locating, backing up and patching the target bundle.

pub mod backup;
pub mod locate;
pub mod patch;

// Re-export key types for easier use by the CLI crate
pub use backup::{ensure_backup, restore, BackupStatus};
pub use locate::locate;
pub use patch::{applicable_count, apply, classify, Patched};
