use super::profile::print_report;
use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Print a previously saved JSON report
pub fn display_report_file(file_path: &Path, top: Option<usize>) -> Result<()> {
    if top == Some(0) {
        anyhow::bail!("top must be greater than 0");
    }

    let report = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    println!("Report: {}", file_path.display());
    println!("  Version: {}", report.version);
    println!("  Log: {}", report.log_file);
    println!("  Generated: {}", report.generated_at.to_rfc3339());
    println!(
        "  Plugins: {} ({} lines, {:.3}ms total)",
        report.summary.plugin_count, report.summary.record_count, report.summary.total_time_ms
    );

    print_report(&report, top);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("vim-plugins-profile v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Per-plugin startup time profiling for Vim and Neovim.");
}
