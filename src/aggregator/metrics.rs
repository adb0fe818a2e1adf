//! Relative cost and summary statistics over per-plugin totals.
//!
//! The relative ratio of a plugin is its total divided by the slowest
//! plugin's total; it only drives bar length.

use super::plugin_times::PluginTimes;
use log::debug;

/// A plugin's total alongside its ratio to the slowest plugin
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeTime {
    pub plugin: String,
    pub exec_time_ms: f64,

    /// `exec_time_ms / max`, in `[0.0, 1.0]`
    pub ratio: f64,
}

/// Compute ratios against the slowest plugin
///
/// **Public** - normalization step before rendering
///
/// # Returns
/// Ratios in first-seen order, or `None` for an empty map (there is no
/// maximum to normalize against). When every total is zero all ratios
/// are zero.
pub fn calculate_relative_times(times: &PluginTimes) -> Option<Vec<RelativeTime>> {
    let max = times.max_value()?;

    debug!("Normalizing {} plugins against max {:.3}ms", times.len(), max);

    let relative = times
        .iter()
        .map(|(plugin, exec_time_ms)| RelativeTime {
            plugin: plugin.to_string(),
            exec_time_ms,
            ratio: if max > 0.0 { exec_time_ms / max } else { 0.0 },
        })
        .collect();

    Some(relative)
}

/// Timing distribution statistics
///
/// **Public** - returned from calculate_time_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeDistribution {
    /// Sum of all plugin totals
    pub total_ms: f64,

    /// Number of distinct plugins
    pub plugin_count: usize,

    /// Number of log lines attributed to a plugin
    pub record_count: usize,

    pub mean_ms: f64,
    pub median_ms: f64,

    /// Share of the total taken by the slowest plugin, in percent
    pub slowest_percentage: f64,
}

/// Calculate summary statistics over per-plugin totals
///
/// **Public** - used for the run summary log line
pub fn calculate_time_distribution(times: &PluginTimes) -> TimeDistribution {
    if times.is_empty() {
        return TimeDistribution::default();
    }

    let total_ms = times.total();
    let plugin_count = times.len();

    let mut values: Vec<f64> = times.iter().map(|(_, time)| time).collect();
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    let median_ms = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };

    let max = times.max_value().unwrap_or(0.0);

    TimeDistribution {
        total_ms,
        plugin_count,
        record_count: times.record_count(),
        mean_ms: total_ms / plugin_count as f64,
        median_ms,
        slowest_percentage: if total_ms > 0.0 {
            (max / total_ms) * 100.0
        } else {
            0.0
        },
    }
}

impl TimeDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging
    pub fn summary(&self) -> String {
        format!(
            "Total: {:.3}ms | Plugins: {} | Lines: {} | Mean: {:.3}ms | Median: {:.3}ms | Slowest: {:.1}%",
            self.total_ms,
            self.plugin_count,
            self.record_count,
            self.mean_ms,
            self.median_ms,
            self.slowest_percentage
        )
    }
}
