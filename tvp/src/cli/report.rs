//! User-facing progress lines.
use std::path::Path;

use colored::Colorize;
use tvp_common::catalog::TARGET_VERSION;
use tvp_common::{PatchOutcome, PatchSpec};

pub fn banner() {
    let title = format!("Claude Code Thinking Visibility Patcher v{TARGET_VERSION}");
    println!("{}", title.bold());
    println!("{}\n", "=".repeat(title.chars().count()));
}

pub fn heading(message: &str) {
    println!("{}{}", "==> ".bold().blue(), message.bold());
}

pub fn step(message: &str) {
    println!("\n{message}");
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn found_target(path: &Path) {
    println!("Found Claude Code at: {}", path.display().to_string().cyan());
}

pub fn patch_status(index: usize, spec: &PatchSpec, outcome: PatchOutcome) {
    println!("\nPatch {}: {}", index + 1, spec.description);
    match outcome {
        PatchOutcome::Applicable => {
            println!("  {} Pattern found - ready to apply", "✓".green())
        }
        PatchOutcome::AlreadyApplied => println!("  {} Already applied", "⚠".yellow()),
        PatchOutcome::NotFound => println!(
            "  {} Pattern not found - may need update for newer version",
            "✗".red()
        ),
    }
}

/// `- Patch 1 (banner): APPLIED`
pub fn summary_line(index: usize, spec: &PatchSpec, verdict: &str) {
    println!("- Patch {} ({}): {}", index + 1, spec.label, verdict);
}

pub fn restart_hint() {
    println!("\nPlease restart Claude Code for changes to take effect.");
}

pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    if size >= GB {
        format!("{:.1}GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.1}MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1}KB", size as f64 / KB as f64)
    } else {
        format!("{size}B")
    }
}
