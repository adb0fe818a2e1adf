//! Run command implementation.
//!
//! The run command:
//! 1. Launches the editor with `--startuptime`
//! 2. Profiles the resulting log
//! 3. Prints the chart (and optional JSON report)
//! 4. Removes the temporary log

use super::models::RunArgs;
use super::profile::{profile_and_print, validate_chart_args};
use crate::editor::{config_dir, default_log_path, EditorRunner, TempLog};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Editor launch failures
/// * Log read errors
/// * Report write errors
pub fn execute_run(args: RunArgs) -> Result<()> {
    validate_run_args(&args)?;

    let start_time = Instant::now();

    println!("Testing {} performance...", args.editor);

    match config_dir(&args.editor) {
        Some(dir) => println!("Assuming your vimfiles folder is {}.", dir.display()),
        None => info!("Could not determine the {} config directory", args.editor),
    }

    let startup_log = TempLog::new(
        args.log_path.clone().unwrap_or_else(default_log_path),
        args.keep_log,
    );

    println!("Generating {} startup profile...", args.editor);
    EditorRunner::new(args.editor.as_str())
        .generate_startup_log(startup_log.path())
        .context("Failed to generate startup log")?;

    profile_and_print(startup_log.path(), &args.chart)?;

    info!(
        "Profile completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate run arguments
///
/// **Public** - can be called before execute_run for early validation
pub fn validate_run_args(args: &RunArgs) -> Result<()> {
    if args.editor.trim().is_empty() {
        anyhow::bail!("Editor cannot be empty");
    }

    if let Some(path) = &args.log_path {
        if path.is_dir() {
            anyhow::bail!("Log path is a directory: {}", path.display());
        }
    }

    validate_chart_args(&args.chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::ChartArgs;

    #[test]
    fn test_validate_run_args_valid() {
        assert!(validate_run_args(&RunArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_run_args_empty_editor() {
        let args = RunArgs {
            editor: "  ".to_string(),
            ..Default::default()
        };

        assert!(validate_run_args(&args).is_err());
    }

    #[test]
    fn test_validate_run_args_log_path_is_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            log_path: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(validate_run_args(&args).is_err());
    }

    #[test]
    fn test_validate_run_args_bad_chart() {
        let args = RunArgs {
            chart: ChartArgs {
                plot_width: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(validate_run_args(&args).is_err());
    }
}
