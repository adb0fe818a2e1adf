//! Reading the editor's `--startuptime` log from disk.

use crate::utils::error::ReadError;
use log::debug;
use std::path::Path;

/// Read a startup log into memory
///
/// **Public** - the only I/O-facing step of the pipeline
///
/// Bytes that are not valid UTF-8 (plugin paths can contain anything)
/// are replaced rather than failing the whole run.
///
/// # Errors
/// * `ReadError` - the path does not exist or cannot be read
pub fn read_log(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();

    debug!("Reading startup log from: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Startup log loaded ({} bytes)", bytes.len());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a startup log and split it into lines, in file order
///
/// **Public** - convenience wrapper over [`read_log`]
pub fn read_log_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ReadError> {
    let text = read_log(path)?;
    Ok(text.lines().map(str::to_string).collect())
}
