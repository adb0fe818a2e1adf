//! Editor process interaction.

pub mod runner;

pub use runner::{config_dir, default_log_path, EditorRunner, TempLog};
