//! Aggregation of timing records into per-plugin totals and metrics.
//!
//! This module transforms parsed timing records into:
//! - Per-plugin cumulative exec time
//! - Ratios against the slowest plugin (for bar scaling)
//! - Timing distribution statistics

pub mod metrics;
pub mod plugin_times;

// Re-export main types and functions
pub use metrics::{
    calculate_relative_times, calculate_time_distribution, RelativeTime, TimeDistribution,
};
pub use plugin_times::{aggregate_records, PluginTimes};
