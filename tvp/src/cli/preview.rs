// tvp/src/cli/preview.rs
use tvp_common::config::Config;
use tvp_common::error::Result;
use tvp_core::applicable_count;

use super::{check_target, report};

/// `--dry-run`: classify and report, never touch the filesystem.
#[derive(Debug, Clone, Copy)]
pub struct Preview;

impl Preview {
    pub fn run(&self, config: &Config) -> Result<()> {
        let checked = check_target(config)?;

        println!();
        report::heading("DRY RUN - No changes will be made");
        println!("\nSummary:");
        for (index, (spec, outcome)) in config.patches().iter().zip(&checked.outcomes).enumerate() {
            let verdict = if outcome.is_applicable() {
                "WOULD APPLY"
            } else {
                "SKIP"
            };
            report::summary_line(index, spec, verdict);
        }

        if applicable_count(&checked.outcomes) > 0 {
            println!("\nRun without --dry-run to apply patches.");
        }
        Ok(())
    }
}
