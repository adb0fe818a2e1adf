//! Configuration and constants for the profiler.

use std::path::PathBuf;

/// Maximum bar width in characters (the slowest plugin gets a full bar)
pub const DEFAULT_PLOT_WIDTH: usize = 64;

/// Directory that plugin managers (vim-plug and friends) install into
pub const DEFAULT_MARKER: &str = "plugged";

/// Editor invoked by the `run` command
pub const DEFAULT_EDITOR: &str = "nvim";

/// Character repeated to draw a bar
pub const BAR_CHAR: char = '*';

/// Minimum width of the time column, before the "ms" suffix
pub const TIME_COLUMN_WIDTH: usize = 5;

/// Decimal places kept when printing a plugin's time
pub const TIME_PRECISION: usize = 3;

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Prefix of the temporary startup log written by the editor
pub const LOG_FILE_PREFIX: &str = "vim-plugins-profile";

/// Settings for a single profiling pass.
///
/// Passed explicitly into [`crate::commands::profile_log`]; there is no
/// process-wide configuration state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    /// Startup log to read
    pub log_path: PathBuf,

    /// Directory name that precedes the plugin name in sourced paths
    pub marker: String,

    /// Bar length of the slowest plugin
    pub plot_width: usize,

    /// Only render the N slowest plugins
    pub top: Option<usize>,
}

impl ProfileConfig {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            marker: DEFAULT_MARKER.to_string(),
            plot_width: DEFAULT_PLOT_WIDTH,
            top: None,
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_plot_width(mut self, plot_width: usize) -> Self {
        self.plot_width = plot_width;
        self
    }

    pub fn with_top(mut self, top: Option<usize>) -> Self {
        self.top = top;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_config_defaults() {
        let config = ProfileConfig::new("startup.log");

        assert_eq!(config.log_path, PathBuf::from("startup.log"));
        assert_eq!(config.marker, "plugged");
        assert_eq!(config.plot_width, 64);
        assert_eq!(config.top, None);
    }

    #[test]
    fn test_profile_config_builders() {
        let config = ProfileConfig::new("startup.log")
            .with_marker("bundle")
            .with_plot_width(40)
            .with_top(Some(5));

        assert_eq!(config.marker, "bundle");
        assert_eq!(config.plot_width, 40);
        assert_eq!(config.top, Some(5));
    }
}
