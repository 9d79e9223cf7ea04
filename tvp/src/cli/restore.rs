// tvp/src/cli/restore.rs
use tvp_common::config::Config;
use tvp_common::error::Result;
use tvp_core::{locate, restore};

use super::report;

/// `--restore`: copy the backup back over the target. No patching.
#[derive(Debug, Clone, Copy)]
pub struct Restore;

impl Restore {
    pub fn run(&self, config: &Config) -> Result<()> {
        let target = locate(config)?;
        report::found_target(&target);

        report::step("Restoring from backup...");
        let bytes = restore(&target)?;
        report::success(&format!(
            "Restored successfully! ({})",
            report::format_size(bytes)
        ));
        report::restart_hint();
        Ok(())
    }
}
