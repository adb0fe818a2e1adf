//! vim-plugins-profile
//!
//! Per-plugin startup time profiling for Vim and Neovim.
//!
//! The editor's `--startuptime` log is parsed into per-line timing
//! records, summed per plugin, ranked, and rendered as a terminal bar
//! chart where the slowest plugin gets the full plot width.
//!
//! ```no_run
//! use vim_plugins_profile::output::render_chart;
//! use vim_plugins_profile::{profile_log, ProfileConfig};
//!
//! let report = profile_log(&ProfileConfig::new("startup.log")).unwrap();
//! for line in render_chart(&report.plugins, None) {
//!     println!("{}", line);
//! }
//! ```

pub mod aggregator;
pub mod commands;
pub mod editor;
pub mod output;
pub mod parser;
pub mod utils;

pub use commands::profile_log;
pub use utils::config::ProfileConfig;
pub use utils::error::ProfileError;
