use crate::utils::config::{DEFAULT_EDITOR, DEFAULT_MARKER, DEFAULT_PLOT_WIDTH};
use std::path::PathBuf;

/// Chart settings shared by `run` and `analyze`
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArgs {
    /// Directory name that precedes the plugin name in sourced paths
    pub marker: String,

    /// Bar length of the slowest plugin
    pub plot_width: usize,

    /// Only print the N slowest plugins
    pub top: Option<usize>,

    /// Output path for a JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for ChartArgs {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            plot_width: DEFAULT_PLOT_WIDTH,
            top: None,
            output_json: None,
        }
    }
}

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Editor binary to profile
    pub editor: String,

    /// Where the editor writes its startup log (defaults to a per-process path)
    pub log_path: Option<PathBuf>,

    /// Leave the startup log on disk afterwards
    pub keep_log: bool,

    pub chart: ChartArgs,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            log_path: None,
            keep_log: false,
            chart: ChartArgs::default(),
        }
    }
}

/// Arguments for the analyze command
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Existing startup log to read
    pub log_path: PathBuf,

    pub chart: ChartArgs,
}
