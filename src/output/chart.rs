//! Terminal bar chart of per-plugin startup time.
//!
//! Each line reads `<name>: (<time>ms) <bar>`, with names right-aligned
//! to the longest plugin name and the slowest plugin drawn with a full
//! `plot_width` bar:
//!
//! ```text
//!     bar: (0.07 ms) ****************************************************************
//!     foo: (0.03 ms) ***************************
//! ```

use super::schema::ReportLine;
use crate::aggregator::{calculate_relative_times, PluginTimes};
use crate::utils::config::{BAR_CHAR, TIME_COLUMN_WIDTH, TIME_PRECISION};
use log::debug;

/// Rank plugins and compute their bar lengths
///
/// **Public** - main entry point for chart layout
///
/// # Arguments
/// * `times` - Per-plugin totals
/// * `plot_width` - Bar length of the slowest plugin
///
/// # Returns
/// Lines sorted by descending time (ties keep first-seen order), or
/// `None` when there is nothing to chart.
pub fn build_report_lines(times: &PluginTimes, plot_width: usize) -> Option<Vec<ReportLine>> {
    let relative = calculate_relative_times(times)?;

    let mut lines: Vec<ReportLine> = relative
        .into_iter()
        .map(|rel| ReportLine {
            bar_length: bar_length(rel.ratio, plot_width),
            plugin: rel.plugin,
            exec_time_ms: rel.exec_time_ms,
            ratio: rel.ratio,
        })
        .collect();

    // stable: equal times stay in first-seen order
    lines.sort_by(|a, b| b.exec_time_ms.total_cmp(&a.exec_time_ms));

    debug!("Built {} chart lines", lines.len());

    Some(lines)
}

/// Bar length for a ratio, truncated towards zero
pub fn bar_length(ratio: f64, plot_width: usize) -> usize {
    (ratio * plot_width as f64).floor() as usize
}

/// Format a time rounded to `TIME_PRECISION` places, left-justified to the
/// time column
///
/// The rounded value is printed in its shortest form with at least one
/// decimal, so `0.07` reads `0.07 ` and `1.0` reads `1.0  `.
pub fn format_time(exec_time_ms: f64) -> String {
    let scale = 10f64.powi(TIME_PRECISION as i32);
    let rounded = (exec_time_ms * scale).round() / scale;

    let mut time = rounded.to_string();
    if !time.contains('.') {
        time.push_str(".0");
    }

    format!("{:<width$}", time, width = TIME_COLUMN_WIDTH)
}

/// Format a single chart line
///
/// **Public** - `name_width` is the width the plugin name is right-justified to
pub fn format_line(line: &ReportLine, name_width: usize) -> String {
    let bar = BAR_CHAR.to_string().repeat(line.bar_length);

    format!(
        "{:>name_width$}: ({}ms) {}",
        line.plugin,
        format_time(line.exec_time_ms),
        bar,
        name_width = name_width
    )
}

/// Render chart lines as text
///
/// **Public** - the caller decides where the text goes
///
/// The name column is sized over every line, so limiting output with
/// `top` does not shift the columns.
pub fn render_chart(lines: &[ReportLine], top: Option<usize>) -> Vec<String> {
    let name_width = lines
        .iter()
        .map(|line| line.plugin.chars().count())
        .max()
        .unwrap_or(0);

    lines
        .iter()
        .take(top.unwrap_or(lines.len()))
        .map(|line| format_line(line, name_width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate_records;
    use crate::parser::TimingRecord;
    use pretty_assertions::assert_eq;

    fn line(plugin: &str, exec_time_ms: f64, bar_length: usize) -> ReportLine {
        ReportLine {
            plugin: plugin.to_string(),
            exec_time_ms,
            ratio: 0.0,
            bar_length,
        }
    }

    #[test]
    fn test_bar_length_floors() {
        assert_eq!(bar_length(1.0, 64), 64);
        assert_eq!(bar_length(0.03 / 0.07, 64), 27);
        assert_eq!(bar_length(0.999, 10), 9);
        assert_eq!(bar_length(0.0, 64), 0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.07), "0.07 ");
        assert_eq!(format_time(0.03), "0.03 ");
        assert_eq!(format_time(1.0), "1.0  ");
        assert_eq!(format_time(0.0), "0.0  ");
        assert_eq!(format_time(0.474), "0.474");
        assert_eq!(format_time(0.0306), "0.031");
        assert_eq!(format_time(12.3456), "12.346");
        assert_eq!(format_time(120.0), "120.0");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(&line("foo", 0.03, 3), 6), "   foo: (0.03 ms) ***");
        assert_eq!(format_line(&line("foo", 0.03, 0), 3), "foo: (0.03 ms) ");
    }

    #[test]
    fn test_build_report_lines_sorted_and_stable() {
        let times = aggregate_records(vec![
            TimingRecord::new("a", 1.0),
            TimingRecord::new("b", 2.0),
            TimingRecord::new("c", 1.0),
            TimingRecord::new("d", 2.0),
        ]);

        let lines = build_report_lines(&times, 10).unwrap();
        let order: Vec<&str> = lines.iter().map(|l| l.plugin.as_str()).collect();

        assert_eq!(order, vec!["b", "d", "a", "c"]);
        assert_eq!(lines[0].bar_length, 10);
        assert_eq!(lines[2].bar_length, 5);
    }

    #[test]
    fn test_build_report_lines_huge_totals_stay_finite() {
        let times = aggregate_records(vec![
            TimingRecord::new("a", f64::MAX),
            TimingRecord::new("b", 1.0),
            TimingRecord::new("a", f64::MAX),
        ]);

        let lines = build_report_lines(&times, 64).unwrap();

        assert_eq!(lines[0].plugin, "a");
        assert_eq!(lines[0].ratio, 1.0);
        assert_eq!(lines[0].bar_length, 64);
        assert!(lines.iter().all(|l| l.ratio.is_finite()));
        assert_eq!(lines[1].bar_length, 0);
    }

    #[test]
    fn test_build_report_lines_empty() {
        assert!(build_report_lines(&PluginTimes::new(), 64).is_none());
    }

    #[test]
    fn test_render_chart_top_keeps_column_width() {
        let lines = vec![line("ab", 2.0, 2), line("longname", 1.0, 1)];

        let rendered = render_chart(&lines, Some(1));

        assert_eq!(rendered, vec!["      ab: (2.0  ms) **".to_string()]);
    }
}
