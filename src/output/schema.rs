//! Report structures shared by the text chart and the JSON writer.
//!
//! Schema is versioned to allow future evolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level report for one profiling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Startup log the report was built from
    pub log_file: String,

    /// Marker directory used to attribute lines to plugins
    pub marker: String,

    /// Bar length of the slowest plugin
    pub plot_width: usize,

    pub summary: ReportSummary,

    /// Plugins, slowest first
    pub plugins: Vec<ReportLine>,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,
}

/// Whole-run figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of all plugin totals, in milliseconds
    pub total_time_ms: f64,

    pub plugin_count: usize,

    /// Log lines attributed to a plugin
    pub record_count: usize,
}

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub plugin: String,

    /// Cumulative exec time, in milliseconds
    pub exec_time_ms: f64,

    /// Ratio to the slowest plugin, in `[0.0, 1.0]`
    pub ratio: f64,

    /// Number of bar characters
    pub bar_length: usize,
}
