//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// The startup log could not be read
#[derive(Error, Debug)]
#[error("Failed to read startup log {}: {source}", .path.display())]
pub struct ReadError {
    pub path: PathBuf,

    #[source]
    pub source: std::io::Error,
}

/// Errors surfaced by the profiling pipeline
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("No plugin timings found under '{marker}' in {}", .log_path.display())]
    EmptyResult { marker: String, log_path: PathBuf },
}

/// Errors that can occur while running the editor to produce a log
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to launch '{editor}': {source}")]
    SpawnFailed {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{editor}' exited with {status}")]
    ExitFailure { editor: String, status: String },

    #[error("'{editor}' finished but did not write {}", .log_path.display())]
    MissingLog { editor: String, log_path: PathBuf },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
