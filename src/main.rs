//! vim-plugins-profile CLI
//!
//! Measures how long each Vim/Neovim plugin takes to load at startup
//! and prints a relative bar chart.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use vim_plugins_profile::commands::{
    display_report_file, display_version, execute_analyze, execute_run, AnalyzeArgs, ChartArgs,
    RunArgs,
};
use vim_plugins_profile::utils::config::{DEFAULT_EDITOR, DEFAULT_MARKER, DEFAULT_PLOT_WIDTH};

/// vim-plugins-profile - per-plugin startup time for Vim and Neovim
#[derive(Parser, Debug)]
#[command(name = "vim-plugins-profile")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Chart options shared by `run` and `analyze`
#[derive(Args, Debug)]
struct ChartOpts {
    /// Directory name plugins are installed under
    #[arg(short, long, default_value = DEFAULT_MARKER, env = "VIM_PLUGINS_PROFILE_MARKER")]
    marker: String,

    /// Bar length of the slowest plugin
    #[arg(short, long, default_value_t = DEFAULT_PLOT_WIDTH)]
    width: usize,

    /// Only show the N slowest plugins
    #[arg(long)]
    top: Option<usize>,

    /// Also write the report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<ChartOpts> for ChartArgs {
    fn from(opts: ChartOpts) -> Self {
        Self {
            marker: opts.marker,
            plot_width: opts.width,
            top: opts.top,
            output_json: opts.output,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the editor, profile its startup and print the chart
    Run {
        /// Editor binary to profile
        #[arg(short, long, default_value = DEFAULT_EDITOR, env = "VIM_PLUGINS_PROFILE_EDITOR")]
        editor: String,

        /// Path for the startup log (defaults to ./vim-plugins-profile.<pid>.log)
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Keep the startup log instead of deleting it
        #[arg(long)]
        keep_log: bool,

        #[command(flatten)]
        chart: ChartOpts,
    },

    /// Profile an existing --startuptime log
    Analyze {
        /// Path to the startup log
        #[arg(short, long)]
        log: PathBuf,

        #[command(flatten)]
        chart: ChartOpts,
    },

    /// Print a saved JSON report
    Show {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Only show the N slowest plugins
        #[arg(long)]
        top: Option<usize>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Run {
            editor,
            log,
            keep_log,
            chart,
        } => {
            execute_run(RunArgs {
                editor,
                log_path: log,
                keep_log,
                chart: chart.into(),
            })?;
        }

        Commands::Analyze { log, chart } => {
            execute_analyze(AnalyzeArgs {
                log_path: log,
                chart: chart.into(),
            })?;
        }

        Commands::Show { file, top } => {
            display_report_file(&file, top)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
