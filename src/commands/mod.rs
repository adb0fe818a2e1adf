//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod profile;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use models::{AnalyzeArgs, ChartArgs, RunArgs};
pub use profile::{execute_analyze, profile_log, validate_chart_args};
pub use run::{execute_run, validate_run_args};
pub use utils::{display_report_file, display_version};
