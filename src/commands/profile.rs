//! Profiling pipeline and the analyze command.
//!
//! The pipeline:
//! 1. Reads the startup log
//! 2. Parses plugin timing records
//! 3. Aggregates exec time per plugin
//! 4. Ranks plugins and lays out the bar chart

use super::models::{AnalyzeArgs, ChartArgs};
use crate::aggregator::{aggregate_records, calculate_time_distribution};
use crate::output::{build_report_lines, render_chart, write_report, Report, ReportSummary};
use crate::parser::{parse_log, read_log};
use crate::utils::config::{ProfileConfig, REPORT_SCHEMA_VERSION};
use crate::utils::error::ProfileError;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::Path;

/// Run the profiling pipeline over a startup log
///
/// **Public** - main library entry point
///
/// # Arguments
/// * `config` - Log path, marker and chart settings
///
/// # Returns
/// Report with plugins sorted slowest first
///
/// # Errors
/// * `ProfileError::Read` - the log could not be read
/// * `ProfileError::EmptyResult` - no line was attributed to a plugin
pub fn profile_log(config: &ProfileConfig) -> Result<Report, ProfileError> {
    info!("Parsing startup log: {}", config.log_path.display());
    let text = read_log(&config.log_path)?;

    let times = aggregate_records(parse_log(&text, &config.marker));

    let empty = || ProfileError::EmptyResult {
        marker: config.marker.clone(),
        log_path: config.log_path.clone(),
    };

    let plugins = build_report_lines(&times, config.plot_width).ok_or_else(empty)?;

    let dist = calculate_time_distribution(&times);
    info!("Startup distribution: {}", dist.summary());

    Ok(Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        log_file: config.log_path.display().to_string(),
        marker: config.marker.clone(),
        plot_width: config.plot_width,
        summary: ReportSummary {
            total_time_ms: dist.total_ms,
            plugin_count: dist.plugin_count,
            record_count: dist.record_count,
        },
        plugins,
        generated_at: Utc::now(),
    })
}

/// Execute the analyze command on an existing log
///
/// **Public** - main entry point called from main.rs
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    validate_chart_args(&args.chart)?;
    profile_and_print(&args.log_path, &args.chart)
}

/// Profile a log, print the chart and write the optional JSON report
///
/// **Public** - shared tail of `run` and `analyze`
pub fn profile_and_print(log_path: &Path, chart: &ChartArgs) -> Result<()> {
    let config = ProfileConfig::new(log_path)
        .with_marker(chart.marker.clone())
        .with_plot_width(chart.plot_width)
        .with_top(chart.top);

    let report = match profile_log(&config) {
        Ok(report) => report,
        Err(err @ ProfileError::EmptyResult { .. }) => {
            println!("{}", err);
            println!(
                "Check that your plugins are installed under a '{}' directory (see --marker).",
                config.marker
            );
            return Ok(());
        }
        Err(err) => return Err(err).context("Failed to profile startup log"),
    };

    print_report(&report, config.top);

    if let Some(path) = &chart.output_json {
        write_report(&report, path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    }

    Ok(())
}

/// Print a report's chart to stdout
pub fn print_report(report: &Report, top: Option<usize>) {
    debug!(
        "Printing {} of {} plugins",
        top.unwrap_or(report.plugins.len()).min(report.plugins.len()),
        report.plugins.len()
    );

    println!();
    for line in render_chart(&report.plugins, top) {
        println!("{}", line);
    }
}

/// Validate chart arguments
///
/// **Public** - can be called before running for early validation
pub fn validate_chart_args(args: &ChartArgs) -> Result<()> {
    if args.marker.is_empty() {
        anyhow::bail!("Marker directory cannot be empty");
    }

    if args.marker.contains('/') {
        anyhow::bail!("Marker must be a single directory name (no '/')");
    }

    if args.plot_width == 0 {
        anyhow::bail!("Plot width must be greater than 0");
    }

    if args.plot_width > 1000 {
        anyhow::bail!("Plot width is too large (max 1000)");
    }

    if args.top == Some(0) {
        anyhow::bail!("top must be greater than 0");
    }

    Ok(())
}
