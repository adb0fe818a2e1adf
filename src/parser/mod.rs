//! Startup log reading and record parsing.
//!
//! This module handles:
//! - Reading the `--startuptime` log from disk
//! - Tokenizing timing lines
//! - Extracting plugin names and exec times

pub mod log_reader;
pub mod record;

// Re-export main types
pub use log_reader::{read_log, read_log_lines};
pub use record::{parse_line, parse_log, parse_records, TimingRecord};
