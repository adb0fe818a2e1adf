//! Fold timing records into per-plugin totals.
//!
//! Every log line that sources a file from a plugin contributes its exec
//! time to that plugin's total. Totals remember the order in which plugins
//! were first seen so that ranking can break ties deterministically.

use crate::parser::TimingRecord;
use log::debug;
use std::collections::HashMap;

/// Cumulative exec time per plugin, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginTimes {
    /// (plugin, total ms) in first-seen order
    entries: Vec<(String, f64)>,

    /// plugin -> position in `entries`
    index: HashMap<String, usize>,

    /// Number of records folded in
    record_count: usize,
}

impl PluginTimes {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record's exec time to its plugin's total
    ///
    /// Negative or non-finite times are ignored, and totals saturate at
    /// `f64::MAX` so ratios stay finite.
    pub fn add(&mut self, record: TimingRecord) {
        if !record.exec_time_ms.is_finite() || record.exec_time_ms < 0.0 {
            debug!(
                "Ignoring exec time {} for '{}'",
                record.exec_time_ms, record.plugin
            );
            return;
        }

        self.record_count += 1;

        match self.index.get(&record.plugin) {
            Some(&position) => {
                let total = &mut self.entries[position].1;
                *total = (*total + record.exec_time_ms).min(f64::MAX);
            }
            None => {
                self.index.insert(record.plugin.clone(), self.entries.len());
                self.entries.push((record.plugin, record.exec_time_ms));
            }
        }
    }

    /// Total for one plugin, if it appeared in the log
    pub fn get(&self, plugin: &str) -> Option<f64> {
        self.index.get(plugin).map(|&position| self.entries[position].1)
    }

    /// Plugins and totals in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, time)| (name.as_str(), *time))
    }

    /// Number of distinct plugins
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records folded in
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Largest per-plugin total, `None` when no plugin was seen
    pub fn max_value(&self) -> Option<f64> {
        self.entries.iter().map(|(_, time)| *time).reduce(f64::max)
    }

    /// Sum of all plugin totals, saturating at `f64::MAX`
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, time)| *time)
            .fold(0.0, |acc, time| (acc + time).min(f64::MAX))
    }
}

impl FromIterator<TimingRecord> for PluginTimes {
    fn from_iter<I: IntoIterator<Item = TimingRecord>>(records: I) -> Self {
        aggregate_records(records)
    }
}

/// Fold timing records into per-plugin totals
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `records` - Records from the parser, in log order
///
/// # Returns
/// Per-plugin totals; empty when no record was produced
pub fn aggregate_records<I>(records: I) -> PluginTimes
where
    I: IntoIterator<Item = TimingRecord>,
{
    let times = records
        .into_iter()
        .fold(PluginTimes::new(), |mut acc, record| {
            acc.add(record);
            acc
        });

    debug!(
        "Aggregated {} records into {} plugins",
        times.record_count(),
        times.len()
    );

    times
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_sums_per_plugin() {
        let times = aggregate_records(vec![
            TimingRecord::new("baz", 0.010),
            TimingRecord::new("qux", 1.5),
            TimingRecord::new("baz", 0.020),
        ]);

        assert_eq!(times.len(), 2);
        assert_eq!(times.record_count(), 3);
        assert!((times.get("baz").unwrap() - 0.030).abs() < 1e-12);
        assert_eq!(times.get("qux"), Some(1.5));
        assert_eq!(times.get("missing"), None);
    }

    #[test]
    fn test_aggregate_keeps_first_seen_order() {
        let times: PluginTimes = vec![
            TimingRecord::new("b", 1.0),
            TimingRecord::new("a", 1.0),
            TimingRecord::new("b", 1.0),
            TimingRecord::new("c", 1.0),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = times.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_aggregate_empty() {
        let times = aggregate_records(Vec::new());

        assert!(times.is_empty());
        assert_eq!(times.max_value(), None);
        assert_eq!(times.total(), 0.0);
    }

    #[test]
    fn test_max_and_total() {
        let times = aggregate_records(vec![
            TimingRecord::new("foo", 0.25),
            TimingRecord::new("bar", 0.5),
            TimingRecord::new("foo", 0.5),
        ]);

        assert_eq!(times.max_value(), Some(0.75));
        assert_eq!(times.total(), 1.25);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let times = aggregate_records(vec![
            TimingRecord::new("a", f64::MAX),
            TimingRecord::new("b", 1.0),
            TimingRecord::new("a", f64::MAX),
        ]);

        assert_eq!(times.get("a"), Some(f64::MAX));
        assert_eq!(times.max_value(), Some(f64::MAX));
        assert_eq!(times.total(), f64::MAX);
    }

    #[test]
    fn test_non_finite_and_negative_times_ignored() {
        let times = aggregate_records(vec![
            TimingRecord::new("a", 1.0),
            TimingRecord::new("a", f64::NAN),
            TimingRecord::new("b", f64::INFINITY),
            TimingRecord::new("c", -2.0),
        ]);

        assert_eq!(times.get("a"), Some(1.0));
        assert_eq!(times.get("b"), None);
        assert_eq!(times.get("c"), None);
        assert_eq!(times.record_count(), 1);
    }
}
