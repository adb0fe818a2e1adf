//! Per-line parser for `--startuptime` records.
//!
//! Relevant lines look like
//!
//! ```text
//! 075.226  000.474  000.474: sourcing /home/me/.config/nvim/plugged/vim-surround/plugin/surround.vim
//! ```
//!
//! and are read as five whitespace-separated fields:
//! `trace_time source_time exec_time flag path`. The path is everything
//! after the fourth field, so it may itself contain spaces.

use log::debug;

/// Execution time attributed to one plugin by one log line
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRecord {
    /// Plugin directory name (the path component after the marker)
    pub plugin: String,

    /// Milliseconds spent in this line's script
    pub exec_time_ms: f64,
}

impl TimingRecord {
    pub fn new(plugin: impl Into<String>, exec_time_ms: f64) -> Self {
        Self {
            plugin: plugin.into(),
            exec_time_ms,
        }
    }
}

/// Raw fields of a tokenized log line, borrowed from the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingFields<'a> {
    pub trace_time: &'a str,
    pub source_time: &'a str,
    pub exec_time: &'a str,
    pub flag: &'a str,
    pub path: &'a str,
}

/// Split a line into its five fields
///
/// **Public** - returns `None` when the line has fewer than five fields
pub fn tokenize(line: &str) -> Option<TimingFields<'_>> {
    let (trace_time, rest) = next_token(line)?;
    let (source_time, rest) = next_token(rest)?;
    let (exec_time, rest) = next_token(rest)?;
    let (flag, rest) = next_token(rest)?;

    let path = rest.trim();
    if path.is_empty() {
        return None;
    }

    Some(TimingFields {
        trace_time,
        source_time,
        exec_time,
        flag,
        path,
    })
}

/// Take the next whitespace-delimited token, returning it and the remainder
///
/// **Private** - internal helper for tokenize
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some(input.split_at(end))
}

/// Extract the plugin name from a sourced path
///
/// **Public** - `.../<marker>/<plugin>/...` yields `<plugin>`
///
/// The marker is matched literally, so plugin names or markers containing
/// regex metacharacters behave like any other text.
pub fn extract_plugin_name<'a>(path: &'a str, marker: &str) -> Option<&'a str> {
    let needle = format!("{}/", marker);
    let (_, remainder) = path.split_once(needle.as_str())?;

    remainder
        .split('/')
        .next()
        .filter(|name| !name.is_empty())
}

/// Parse the exec time column
///
/// Neovim writes the last time column with a trailing `:`; negative,
/// NaN and infinite values are rejected.
pub fn parse_exec_time(value: &str) -> Option<f64> {
    value
        .trim_end_matches(':')
        .parse::<f64>()
        .ok()
        .filter(|time| time.is_finite() && *time >= 0.0)
}

/// Parse one line into a record
///
/// **Public** - `None` means "skip this line", never an error
pub fn parse_line(line: &str, marker: &str) -> Option<TimingRecord> {
    if !line.contains(marker) {
        return None;
    }

    let Some(fields) = tokenize(line) else {
        debug!("Skipping short line: {}", line.trim_end());
        return None;
    };

    let Some(plugin) = extract_plugin_name(fields.path, marker) else {
        debug!("Skipping line without '{}/<plugin>': {}", marker, fields.path);
        return None;
    };

    let Some(exec_time_ms) = parse_exec_time(fields.exec_time) else {
        debug!("Skipping line with invalid exec time '{}'", fields.exec_time);
        return None;
    };

    Some(TimingRecord::new(plugin, exec_time_ms))
}

/// Lazily parse a sequence of lines, keeping input order
///
/// **Public** - main entry point for record extraction
pub fn parse_records<'a, I>(lines: I, marker: &'a str) -> impl Iterator<Item = TimingRecord> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    lines
        .into_iter()
        .filter_map(move |line| parse_line(line, marker))
}

/// Lazily parse a whole log text
///
/// **Public** - convenience wrapper over [`parse_records`]
pub fn parse_log<'a>(text: &'a str, marker: &'a str) -> impl Iterator<Item = TimingRecord> + 'a {
    parse_records(text.lines(), marker)
}
