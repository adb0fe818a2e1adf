//! Launching the editor to produce a `--startuptime` log.

use crate::utils::config::LOG_FILE_PREFIX;
use crate::utils::error::EditorError;
use log::{debug, info, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs an editor binary that understands `--startuptime`
#[derive(Debug, Clone)]
pub struct EditorRunner {
    editor: String,
}

impl EditorRunner {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }

    /// Start the editor, let it write its startup log, and quit
    ///
    /// Runs `<editor> --startuptime <log_path> -c q` with the terminal
    /// inherited, since Neovim expects one.
    pub fn generate_startup_log(&self, log_path: &Path) -> Result<(), EditorError> {
        debug!(
            "Running: {} --startuptime {} -c q",
            self.editor,
            log_path.display()
        );

        let status = Command::new(&self.editor)
            .arg("--startuptime")
            .arg(log_path)
            .args(["-c", "q"])
            .status()
            .map_err(|source| EditorError::SpawnFailed {
                editor: self.editor.clone(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::ExitFailure {
                editor: self.editor.clone(),
                status: status.to_string(),
            });
        }

        if !log_path.exists() {
            return Err(EditorError::MissingLog {
                editor: self.editor.clone(),
                log_path: log_path.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Log path unique to this process: `./vim-plugins-profile.<pid>.log`
pub fn default_log_path() -> PathBuf {
    PathBuf::from(format!("./{}.{}.log", LOG_FILE_PREFIX, std::process::id()))
}

/// The editor's configuration directory, from the environment
pub fn config_dir(editor: &str) -> Option<PathBuf> {
    resolve_config_dir(
        editor,
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

/// `$XDG_CONFIG_HOME/<editor>`, falling back to `$HOME/.config/<editor>`
pub fn resolve_config_dir(
    editor: &str,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.filter(|dir| !dir.is_empty())?).join(".config"),
    };

    // "/usr/bin/nvim" configures under "nvim"
    let name = Path::new(editor)
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(editor));

    Some(base.join(name))
}

/// Startup log that is removed when dropped, unless kept
#[derive(Debug)]
pub struct TempLog {
    path: PathBuf,
    keep: bool,
}

impl TempLog {
    pub fn new(path: impl Into<PathBuf>, keep: bool) -> Self {
        Self {
            path: path.into(),
            keep,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempLog {
    fn drop(&mut self) {
        if self.keep {
            info!("Keeping startup log: {}", self.path.display());
            return;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed startup log: {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}
