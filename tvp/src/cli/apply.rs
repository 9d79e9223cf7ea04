// tvp/src/cli/apply.rs
use colored::Colorize;
use tracing::debug;
use tvp_common::config::Config;
use tvp_common::error::{Result, TvpError};
use tvp_core::{applicable_count, apply, ensure_backup, BackupStatus};

use super::{check_target, report};

/// Default mode: back up, patch and write the target.
#[derive(Debug, Clone, Copy)]
pub struct Apply;

impl Apply {
    pub fn run(&self, config: &Config) -> Result<()> {
        let checked = check_target(config)?;
        let specs = config.patches();

        let count = applicable_count(&checked.outcomes);
        if count == 0 {
            return Err(TvpError::NoApplicablePatches);
        }
        debug!("{} of {} patches applicable", count, specs.len());

        match ensure_backup(&checked.path)? {
            BackupStatus::Created { path, bytes } => {
                report::step("Creating backup...");
                report::success(&format!(
                    "Backup created: {} ({})",
                    path.display(),
                    report::format_size(bytes)
                ));
            }
            BackupStatus::Existing(path) => {
                debug!("Keeping existing backup at {}", path.display());
            }
        }

        println!();
        report::heading("Applying patches...");
        let patched = apply(&checked.contents, specs, &checked.outcomes);
        for (index, (spec, applied)) in specs.iter().zip(&patched.applied).enumerate() {
            if *applied {
                report::success(&format!(
                    "Patch {} applied: {}",
                    index + 1,
                    spec.applied_message
                ));
            }
        }

        report::step("Writing patched file...");
        tvp_aio::atomic_write_file(&checked.path, patched.contents.as_bytes())?;
        report::success("File written successfully");

        println!("\nSummary:");
        for (index, (spec, applied)) in specs.iter().zip(&patched.applied).enumerate() {
            let verdict = if *applied {
                "APPLIED"
            } else {
                "SKIPPED"
            };
            report::summary_line(index, spec, verdict);
        }

        println!("\n{}", "Patches applied!".green().bold());
        report::restart_hint();
        println!("\nTo restore original behavior, run: tvp --restore");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tvp_common::config::backup_path_for;
    use tvp_common::PatchSpec;

    use super::*;

    #[test]
    fn writes_only_substitutions_that_took_effect() {
        let home = TempDir::new().unwrap();
        let mut config = Config::with_home(home.path());
        config.patches = vec![
            PatchSpec::new("wide", "wide", "abc", "xyz"),
            PatchSpec::new("narrow", "narrow", "bc", "BC"),
        ];
        let target = config.candidates()[0].clone();
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "abc").unwrap();

        Apply.run(&config).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "xyz");
        assert_eq!(fs::read_to_string(backup_path_for(&target)).unwrap(), "abc");
    }
}
