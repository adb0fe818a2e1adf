//! Report construction and writers.
//!
//! This module handles:
//! - Ranking plugins and laying out the terminal bar chart
//! - Writing and reading JSON reports

pub mod chart;
pub mod json;
pub mod schema;

// Re-export main functions
pub use chart::{build_report_lines, render_chart};
pub use json::{read_report, write_report};
pub use schema::{Report, ReportLine, ReportSummary};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
